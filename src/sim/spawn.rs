//! Timed enemy generation with level-indexed rate and speed
//!
//! The spawn timer itself lives with the loop controller; this module is
//! the pure half: cadence formulas and the roll that turns one timer
//! firing into an enemy aimed at the viewport center.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Color, Enemy, EnemyKind};
use crate::consts::*;
use crate::direction_toward;

/// Spawn timer period for a level, clamped to the floor
#[must_use]
pub fn spawn_period_ms(level: u32) -> f32 {
    (SPAWN_BASE_PERIOD_MS - level as f32 * SPAWN_PERIOD_STEP_MS).max(SPAWN_MIN_PERIOD_MS)
}

/// Enemy speed for a level, units per frame
#[must_use]
pub fn enemy_speed(level: u32) -> f32 {
    ENEMY_BASE_SPEED + level as f32 * ENEMY_SPEED_PER_LEVEL
}

/// Position just outside a uniformly chosen viewport edge: pick an axis,
/// pick an end, slide along the edge.
fn edge_position(viewport: Vec2, radius: f32, rng: &mut Pcg32) -> Vec2 {
    if rng.random_bool(0.5) {
        let x = if rng.random_bool(0.5) { -radius } else { viewport.x + radius };
        Vec2::new(x, rng.random::<f32>() * viewport.y)
    } else {
        let y = if rng.random_bool(0.5) { -radius } else { viewport.y + radius };
        Vec2::new(rng.random::<f32>() * viewport.x, y)
    }
}

/// Roll one enemy for the given level, steered at the viewport center at
/// creation time (never re-aimed afterward).
pub fn spawn_enemy(viewport: Vec2, level: u32, rng: &mut Pcg32) -> Enemy {
    let base_radius = rng.random_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS);
    let pos = edge_position(viewport, base_radius, rng);
    let vel = direction_toward(pos, viewport * 0.5) * enemy_speed(level);
    let color = Color::from_hue(rng.random::<f32>() * 360.0);
    let kind = if rng.random_bool(SPECIAL_CHANCE) {
        EnemyKind::Special
    } else {
        EnemyKind::Normal
    };
    Enemy::new(pos, vel, base_radius, color, kind)
}
