//! Per-frame simulation advance
//!
//! One call per display refresh while the session is Active. Velocities
//! are already scaled to one frame tick, so there is no delta-time
//! integration here - the refresh rate implicitly sets world speed.

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the world by one frame.
///
/// Order: particles that finished fading last frame are dropped first,
/// then every entity integrates its per-frame velocity (particles with
/// friction and fade, projectiles with off-viewport culling), and the
/// combat resolver runs over the advanced positions.
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Active {
        return;
    }

    state.particles.retain(|p| !p.is_dead());
    for particle in &mut state.particles {
        particle.advance();
    }

    for projectile in &mut state.projectiles {
        projectile.advance();
    }
    let viewport = state.viewport;
    state.projectiles.retain(|p| !p.is_offscreen(viewport));

    for enemy in &mut state.enemies {
        enemy.advance();
    }

    collision::resolve_frame(state, events);
}
