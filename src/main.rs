//! Nova Siege entry point
//!
//! There is no windowed build; the binary runs a scripted autopilot
//! session against logging sinks so the whole loop - spawning, combat,
//! progression, game over, high score persistence - can be exercised
//! from a terminal.

use std::path::Path;

use anyhow::Result;
use glam::Vec2;

use nova_siege::GameLoop;
use nova_siege::audio::{AudioBackend, SoundEffect};
use nova_siege::highscores::JsonFileStore;
use nova_siege::present::{Overlay, Presentation, TextField};
use nova_siege::settings::Settings;
use nova_siege::sim::{Color, GamePhase, GameState};

/// Nominal display refresh interval
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Demo session cap: ten minutes of simulated frames
const MAX_FRAMES: u32 = 36_000;
/// Autopilot trigger cadence, in frames
const FIRE_EVERY: u32 = 12;

/// Presentation sink that narrates to the log instead of a canvas
#[derive(Default)]
struct LogPresentation;

impl Presentation for LogPresentation {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, _color: Color) -> Result<()> {
        log::trace!("circle r={radius:.1} at ({:.0},{:.0})", center.x, center.y);
        Ok(())
    }

    fn draw_ring(&mut self, center: Vec2, radius: f32, _color: Color) -> Result<()> {
        log::trace!("ring r={radius:.1} at ({:.0},{:.0})", center.x, center.y);
        Ok(())
    }

    fn draw_health_bar(&mut self, _center: Vec2, fraction: f32) -> Result<()> {
        log::trace!("health bar {:.0}%", fraction * 100.0);
        Ok(())
    }

    fn show_overlay(&mut self, overlay: Overlay) -> Result<()> {
        log::info!("overlay up: {}", overlay.as_str());
        Ok(())
    }

    fn hide_overlay(&mut self, overlay: Overlay) -> Result<()> {
        log::debug!("overlay down: {}", overlay.as_str());
        Ok(())
    }

    fn set_text(&mut self, field: TextField, value: &str) -> Result<()> {
        log::debug!("{} = {}", field.as_str(), value);
        Ok(())
    }

    fn show_floating_label(&mut self, pos: Vec2, text: &str, _fade_ms: u32) -> Result<()> {
        log::debug!("+{text} at ({:.0},{:.0})", pos.x, pos.y);
        Ok(())
    }
}

/// Audio backend that names each effect in the log
struct LogAudio;

impl AudioBackend for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {effect:?}");
    }
}

/// Aim at the enemy closest to the defender - the most dangerous one
fn most_dangerous_enemy(state: &GameState) -> Option<Vec2> {
    let center = state.center();
    state
        .enemies
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(center)
                .partial_cmp(&b.pos.distance_squared(center))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|enemy| enemy.pos)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load(Path::new("nova-siege.settings.json"));
    let seed = settings.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("starting demo session (seed {seed})");

    let store = JsonFileStore::new("nova-siege.highscore.json");
    let mut game = GameLoop::new(
        Vec2::new(1280.0, 720.0),
        seed,
        LogPresentation,
        Some(LogAudio),
        Some(store),
        settings,
    );

    game.start();
    let mut frames = 0u32;
    while game.phase() != GamePhase::Over && frames < MAX_FRAMES {
        if frames % FIRE_EVERY == 0 {
            if let Some(target) = most_dangerous_enemy(game.state()) {
                game.fire(target);
            }
        }
        game.on_frame(FRAME_MS);
        frames += 1;
    }

    log::info!(
        "session over after {frames} frames: score {}, level {}, best {}",
        game.score(),
        game.level(),
        game.high_score()
    );
}
