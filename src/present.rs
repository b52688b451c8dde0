//! Presentation contract consumed by the render pass
//!
//! The drawing surface is an opaque sink: the core paints shapes and
//! publishes HUD text through this trait and never learns what sits
//! behind it (a canvas, a terminal, a test probe). Calls are
//! fire-and-forget; a failed draw is logged and never aborts a frame.

use anyhow::Result;
use glam::Vec2;

use crate::sim::{Color, EnemyKind, GameState};

/// Overlay panels the host UI can show or hide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Pre-game start prompt
    Start,
    /// Pause curtain
    Pause,
    /// End-of-session summary
    GameOver,
}

impl Overlay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::Start => "start",
            Overlay::Pause => "pause",
            Overlay::GameOver => "game-over",
        }
    }
}

/// HUD text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Score,
    Level,
    HighScore,
    /// Score shown on the game-over summary
    FinalScore,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Score => "score",
            TextField::Level => "level",
            TextField::HighScore => "high-score",
            TextField::FinalScore => "final-score",
        }
    }
}

/// Opaque drawing and UI sink
pub trait Presentation {
    /// Start a frame. Implementations typically paint a translucent wash
    /// here so moving entities leave a short trail.
    fn begin_frame(&mut self) -> Result<()>;

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<()>;

    /// Outline ring, used for the special-enemy glow
    fn draw_ring(&mut self, center: Vec2, radius: f32, color: Color) -> Result<()>;

    /// Health bar under its owner; `fraction` is already clamped to 0..=1
    fn draw_health_bar(&mut self, center: Vec2, fraction: f32) -> Result<()>;

    fn show_overlay(&mut self, overlay: Overlay) -> Result<()>;

    fn hide_overlay(&mut self, overlay: Overlay) -> Result<()>;

    fn set_text(&mut self, field: TextField, value: &str) -> Result<()>;

    /// Transient score label at a world position. Fading out and removal
    /// after `fade_ms` are the sink's business, not simulation state.
    fn show_floating_label(&mut self, pos: Vec2, text: &str, fade_ms: u32) -> Result<()>;
}

/// Sink that draws nothing; for headless runs and as a safe fallback
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresentation;

impl Presentation for NullPresentation {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }
    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) -> Result<()> {
        Ok(())
    }
    fn draw_ring(&mut self, _center: Vec2, _radius: f32, _color: Color) -> Result<()> {
        Ok(())
    }
    fn draw_health_bar(&mut self, _center: Vec2, _fraction: f32) -> Result<()> {
        Ok(())
    }
    fn show_overlay(&mut self, _overlay: Overlay) -> Result<()> {
        Ok(())
    }
    fn hide_overlay(&mut self, _overlay: Overlay) -> Result<()> {
        Ok(())
    }
    fn set_text(&mut self, _field: TextField, _value: &str) -> Result<()> {
        Ok(())
    }
    fn show_floating_label(&mut self, _pos: Vec2, _text: &str, _fade_ms: u32) -> Result<()> {
        Ok(())
    }
}

/// Paint one frame of world state: wash, defender with health bar,
/// projectiles, enemies (ringed when special), particles with their
/// current opacity.
///
/// A fault while presenting one entity must not take down the rest of
/// the frame, so every draw result is squashed to a warning here.
pub fn render_frame(state: &GameState, sink: &mut impl Presentation) {
    log_draw(sink.begin_frame());

    log_draw(sink.draw_circle(state.defender.pos, state.defender.radius, state.defender.color));
    log_draw(sink.draw_health_bar(state.defender.pos, state.defender.health_fraction()));

    for projectile in &state.projectiles {
        log_draw(sink.draw_circle(projectile.pos, projectile.radius, projectile.color));
    }

    for enemy in &state.enemies {
        log_draw(sink.draw_circle(enemy.pos, enemy.radius, enemy.color));
        if enemy.kind == EnemyKind::Special {
            log_draw(sink.draw_ring(enemy.pos, enemy.radius, Color::SPECIAL_OUTLINE));
        }
    }

    for particle in &state.particles {
        log_draw(sink.draw_circle(
            particle.pos,
            particle.radius,
            particle.color.with_alpha(particle.alpha),
        ));
    }
}

fn log_draw(result: Result<()>) {
    if let Err(err) = result {
        log::warn!("presentation fault: {err:#}");
    }
}
