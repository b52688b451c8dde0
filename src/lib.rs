//! Nova Siege - a single-screen arcade survival game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, progression)
//! - `schedule`: Cancellable cooperative schedules for the frame and spawn timers
//! - `game`: Game loop controller and the host-facing input surface
//! - `present`: Opaque drawing/UI sink consumed by the render pass
//! - `audio`: Fire-and-forget sound effect sink
//! - `highscores`: Persisted best-score tracking
//! - `settings`: Player preferences

pub mod audio;
pub mod game;
pub mod highscores;
pub mod present;
pub mod schedule;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Defender body radius
    pub const DEFENDER_RADIUS: f32 = 15.0;
    /// Defender starting health
    pub const DEFENDER_MAX_HEALTH: i32 = 100;
    /// Damage per enemy contact - three contacts are fatal
    pub const ENEMY_CONTACT_DAMAGE: i32 = 34;

    /// Projectile body radius
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Projectile speed, units per frame
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy base radius range (before the special scale-up)
    pub const ENEMY_MIN_RADIUS: f32 = 10.0;
    pub const ENEMY_MAX_RADIUS: f32 = 30.0;
    /// Enemy speed floor, units per frame
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    /// Additional enemy speed per level
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.5;

    /// Probability that a freshly spawned enemy is special
    pub const SPECIAL_CHANCE: f64 = 0.2;
    /// Radius multiplier applied to special enemies at creation
    pub const SPECIAL_RADIUS_SCALE: f32 = 1.5;
    /// Score multiplier for special enemies
    pub const SPECIAL_SCORE_SCALE: u64 = 2;

    /// Spawn timer period before the per-level speed-up
    pub const SPAWN_BASE_PERIOD_MS: f32 = 1000.0;
    /// Spawn period reduction per level
    pub const SPAWN_PERIOD_STEP_MS: f32 = 50.0;
    /// Spawn period floor - the base formula would hit zero at level 20
    pub const SPAWN_MIN_PERIOD_MS: f32 = 200.0;

    /// Level-up when score first exceeds `level * LEVEL_SCORE_STEP`
    pub const LEVEL_SCORE_STEP: u64 = 1000;

    /// Per-frame particle velocity damping
    pub const PARTICLE_FRICTION: f32 = 0.99;
    /// Per-frame particle alpha decrement
    pub const PARTICLE_FADE_STEP: f32 = 0.01;
    /// Upper bound on a burst particle's radius
    pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
    /// Spread of burst particle velocities
    pub const PARTICLE_SPEED_SPREAD: f32 = 6.0;

    /// Contact slack for discrete-step circle overlap
    pub const COLLISION_EPSILON: f32 = 1.0;

    /// Floating score label fade duration
    pub const FLOATING_LABEL_FADE_MS: u32 = 750;
}

/// Unit vector from `from` toward `to`; falls back to +X when they coincide
#[inline]
#[must_use]
pub fn direction_toward(from: Vec2, to: Vec2) -> Vec2 {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO { Vec2::X } else { dir }
}
