//! Deterministic simulation module
//!
//! All gameplay logic lives here: entity state, spawning, the per-frame
//! combat resolver and score progression. The module is pure and
//! deterministic - seeded RNG only, stable per-frame update order, no
//! adapter or platform dependencies.

pub mod collision;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_touch, resolve_frame};
pub use spawn::{enemy_speed, spawn_enemy, spawn_period_ms};
pub use state::{
    Color, Defender, Enemy, EnemyKind, GameEvent, GamePhase, GameState, MAX_PARTICLES, Particle,
    Projectile,
};
pub use tick::tick;
