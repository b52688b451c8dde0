//! Score accumulation and level thresholds

use super::state::{GameEvent, GameState};
use crate::consts::LEVEL_SCORE_STEP;

/// Add an impact's score delta and run the level-up check.
///
/// The check happens once per impact event, not once per frame, and the
/// level climbs by at most one per event even if the delta alone crosses
/// several thresholds (unreachable with the current tuning - the largest
/// possible delta is well under one threshold step).
pub fn award(state: &mut GameState, delta: u64, events: &mut Vec<GameEvent>) {
    state.score += delta;
    if state.score > state.level as u64 * LEVEL_SCORE_STEP {
        state.level += 1;
        log::debug!("level up to {} at score {}", state.level, state.score);
        events.push(GameEvent::LevelUp { level: state.level });
    }
}
