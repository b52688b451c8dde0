//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]; there are no
//! ambient globals. All randomness flows through the state's seeded RNG
//! so a fixed seed gives a fully reproducible run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Upper bound on live particles (the burst spawner stops here)
pub const MAX_PARTICLES: usize = 512;

/// HSLA color handed to the presentation sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Hue in degrees, 0..360
    pub hue: f32,
    /// Saturation, 0..=1
    pub saturation: f32,
    /// Lightness, 0..=1
    pub lightness: f32,
    /// Opacity, 0..=1
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Self = Self::hsl(0.0, 0.0, 1.0);
    /// Body color of special enemies
    pub const SPECIAL: Self = Self::hsl(0.0, 1.0, 0.5);
    /// Outline ring drawn around special enemies
    pub const SPECIAL_OUTLINE: Self = Self::hsl(0.0, 1.0, 0.8);

    /// Opaque color from hue/saturation/lightness
    #[must_use]
    pub const fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    /// Enemy body color: arbitrary hue at half saturation and lightness
    #[must_use]
    pub const fn from_hue(hue: f32) -> Self {
        Self::hsl(hue, 0.5, 0.5)
    }

    /// Same color at a different opacity
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Pre-start, showing the start prompt
    #[default]
    Idle,
    /// Simulation advancing on every display refresh
    Active,
    /// Frozen mid-session; world state is retained for resume
    Paused,
    /// Terminal for the session
    Over,
}

/// Enemy variant, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Normal,
    /// Larger, double score, distinct body color and outline
    Special,
}

/// The stationary player entity at the viewport center
#[derive(Debug, Clone)]
pub struct Defender {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    /// May go negative on the killing blow; rendering clamps at zero
    pub health: i32,
}

impl Defender {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: DEFENDER_RADIUS,
            color: Color::WHITE,
            health: DEFENDER_MAX_HEALTH,
        }
    }

    /// Apply damage; returns true when health has crossed to <= 0.
    ///
    /// Pure state transition - the caller owns the game-over handling and
    /// any draw or audio side effects.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.health <= 0
    }

    /// Health as a render fraction, clamped at zero
    #[must_use]
    pub fn health_fraction(&self) -> f32 {
        self.health.max(0) as f32 / DEFENDER_MAX_HEALTH as f32
    }
}

/// A player-fired bullet
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: PROJECTILE_RADIUS,
            color: Color::WHITE,
        }
    }

    /// Advance one frame tick
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// True once the body is fully outside the viewport rectangle
    #[must_use]
    pub fn is_offscreen(&self, viewport: Vec2) -> bool {
        self.pos.x + self.radius < 0.0
            || self.pos.x - self.radius > viewport.x
            || self.pos.y + self.radius < 0.0
            || self.pos.y - self.radius > viewport.y
    }
}

/// A hostile entity converging on the defender
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub kind: EnemyKind,
}

impl Enemy {
    /// Build an enemy from its pre-roll base radius. Specials are scaled
    /// up and recolored here, once; kind and radius never mutate later.
    pub fn new(pos: Vec2, vel: Vec2, base_radius: f32, color: Color, kind: EnemyKind) -> Self {
        let (radius, color) = match kind {
            EnemyKind::Normal => (base_radius, color),
            EnemyKind::Special => (base_radius * SPECIAL_RADIUS_SCALE, Color::SPECIAL),
        };
        Self {
            pos,
            vel,
            radius,
            color,
            kind,
        }
    }

    /// Advance one frame tick
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Score awarded for shooting this enemy down
    #[must_use]
    pub fn score_value(&self) -> u64 {
        let base = self.radius.floor() as u64;
        match self.kind {
            EnemyKind::Normal => base,
            EnemyKind::Special => base * SPECIAL_SCORE_SCALE,
        }
    }
}

/// Short-lived impact debris; purely visual feedback
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Opacity, 1.0 at birth; the particle dies at <= 0
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            alpha: 1.0,
        }
    }

    /// Damp velocity, integrate position, fade
    pub fn advance(&mut self) {
        self.vel *= PARTICLE_FRICTION;
        self.pos += self.vel;
        self.alpha -= PARTICLE_FADE_STEP;
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Side effects produced by a frame, consumed by the loop controller
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An enemy reached the defender
    DefenderHit { health: i32 },
    /// A projectile shot an enemy down
    EnemyDestroyed { pos: Vec2, score: u64 },
    /// Cumulative score crossed the current level threshold
    LevelUp { level: u32 },
    /// Defender health crossed to zero or below
    DefenderDown { score: u64 },
}

/// Complete session state owned by the game loop controller
#[derive(Debug, Clone)]
pub struct GameState {
    /// Viewport dimensions in world units
    pub viewport: Vec2,
    pub phase: GamePhase,
    pub defender: Defender,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    /// Session score, monotonic non-negative
    pub score: u64,
    /// Difficulty level, starts at 1 and only climbs
    pub level: u32,
    /// Cap applied when spawning particle bursts
    pub particle_cap: usize,
    /// Seeded RNG - every random roll in the simulation goes through here
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(viewport: Vec2, seed: u64) -> Self {
        Self {
            viewport,
            phase: GamePhase::Idle,
            defender: Defender::new(viewport * 0.5),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            score: 0,
            level: 1,
            particle_cap: MAX_PARTICLES,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Session reset shared by start, restart and mid-game resize: fresh
    /// defender, cleared collections, score and level back to their
    /// starting values. The RNG keeps rolling so successive sessions
    /// differ; the phase is the caller's to set.
    pub fn reset(&mut self) {
        self.defender = Defender::new(self.center());
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.score = 0;
        self.level = 1;
    }

    /// Viewport midpoint - the defender's post and the projectile origin
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    /// Snap the defender back to the (possibly changed) viewport center
    pub fn recenter_defender(&mut self) {
        self.defender.pos = self.center();
    }
}
