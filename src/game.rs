//! Game loop controller
//!
//! Owns the session state, both cooperative schedules, and the adapter
//! seams. Hosts drive it from the outside: input calls as they happen,
//! plus [`GameLoop::on_frame`] on every display refresh. All state
//! machine transitions live here, and each one settles its schedule
//! handles before arming anything new - a transition that stops the
//! loop cancels both schedules, and a transition that starts it arms
//! both exactly once.

use glam::Vec2;

use crate::audio::{AudioBackend, AudioManager, SoundEffect};
use crate::consts::*;
use crate::direction_toward;
use crate::highscores::{HighScoreBoard, ScoreStore};
use crate::present::{Overlay, Presentation, TextField, render_frame};
use crate::schedule::{FrameSchedule, SpawnTimer};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState, Projectile, spawn};

/// Orchestrates one session at a time: spawning, per-frame updates,
/// combat resolution, progression, and the Idle/Active/Paused/Over
/// state machine.
pub struct GameLoop<P, A, S> {
    state: GameState,
    frame: FrameSchedule,
    spawner: SpawnTimer,
    presentation: P,
    audio: AudioManager<A>,
    scores: HighScoreBoard<S>,
    settings: Settings,
    /// Scratch buffer reused across frames
    events: Vec<GameEvent>,
}

impl<P, A, S> GameLoop<P, A, S>
where
    P: Presentation,
    A: AudioBackend,
    S: ScoreStore,
{
    /// Build an idle controller showing the start prompt. `audio` and
    /// `store` are optional capabilities; absence degrades per the
    /// adapter contracts instead of failing construction.
    pub fn new(
        viewport: Vec2,
        seed: u64,
        presentation: P,
        audio: Option<A>,
        store: Option<S>,
        settings: Settings,
    ) -> Self {
        let mut state = GameState::new(viewport, seed);
        state.particle_cap = settings.max_particles;
        let mut audio = AudioManager::new(audio);
        audio.set_enabled(settings.sound_enabled);
        let scores = HighScoreBoard::new(store);

        let mut this = Self {
            state,
            frame: FrameSchedule::default(),
            spawner: SpawnTimer::default(),
            presentation,
            audio,
            scores,
            settings,
            events: Vec::new(),
        };
        let best = this.scores.best().to_string();
        this.publish(TextField::HighScore, &best);
        this.overlay(Overlay::Start, true);
        this
    }

    // === Input surface ===

    /// Start a session from the idle prompt
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Idle {
            self.begin_session();
        }
    }

    /// Restart after game over, or abandon a paused session and start over
    pub fn restart(&mut self) {
        if matches!(self.state.phase, GamePhase::Over | GamePhase::Paused) {
            self.begin_session();
        }
    }

    /// Freeze the session. A no-op unless Active, so a repeated pause
    /// input cannot double-cancel anything.
    pub fn pause(&mut self) {
        if self.state.phase != GamePhase::Active {
            return;
        }
        self.frame.cancel();
        self.spawner.cancel();
        self.state.phase = GamePhase::Paused;
        self.overlay(Overlay::Pause, true);
        log::debug!("paused");
    }

    /// Thaw a paused session with its world state intact
    pub fn resume(&mut self) {
        if self.state.phase != GamePhase::Paused {
            return;
        }
        self.overlay(Overlay::Pause, false);
        self.frame.arm();
        self.spawner.arm(spawn::spawn_period_ms(self.state.level));
        self.state.phase = GamePhase::Active;
        log::debug!("resumed");
    }

    /// Keyboard pause toggle
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Active => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => {}
        }
    }

    /// Fire a projectile from the defender toward `target`. Ignored
    /// outside the Active phase - clicks on menus and overlays never
    /// shoot.
    pub fn fire(&mut self, target: Vec2) {
        if self.state.phase != GamePhase::Active {
            return;
        }
        let origin = self.state.center();
        let vel = direction_toward(origin, target) * PROJECTILE_SPEED;
        self.state.projectiles.push(Projectile::new(origin, vel));
        self.audio.play(SoundEffect::Shoot);
    }

    /// Flip the sound preference; returns the new setting
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.audio.set_enabled(self.settings.sound_enabled);
        self.settings.sound_enabled
    }

    /// Viewport dimension change. Resizing a live session (Active or
    /// Paused) restarts it from scratch rather than rescaling the world;
    /// when Idle or Over only the defender is re-centered.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.viewport = Vec2::new(width, height);
        match self.state.phase {
            GamePhase::Active | GamePhase::Paused => self.begin_session(),
            GamePhase::Idle | GamePhase::Over => self.state.recenter_defender(),
        }
    }

    /// Advance by one host display-refresh callback.
    ///
    /// `dt_ms` is wall time since the previous callback and drives only
    /// the spawn timer; entity velocities are per-frame, so simulation
    /// speed follows the refresh rate. Does nothing while the frame
    /// schedule is cancelled.
    pub fn on_frame(&mut self, dt_ms: f32) {
        if !self.frame.is_armed() {
            return;
        }

        let fires = self.spawner.advance(dt_ms);
        for _ in 0..fires {
            let enemy =
                spawn::spawn_enemy(self.state.viewport, self.state.level, &mut self.state.rng);
            self.state.enemies.push(enemy);
        }

        let mut events = std::mem::take(&mut self.events);
        events.clear();
        sim::tick(&mut self.state, &mut events);
        for event in &events {
            self.apply_event(event);
        }
        self.events = events;

        render_frame(&self.state, &mut self.presentation);
    }

    // === Introspection ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn high_score(&self) -> u64 {
        self.scores.best()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the per-frame schedule is armed
    pub fn frame_armed(&self) -> bool {
        self.frame.is_armed()
    }

    /// Whether the spawn timer is armed
    pub fn spawn_armed(&self) -> bool {
        self.spawner.is_armed()
    }

    // === Transitions ===

    /// The Idle -> Active reset path, shared by start, restart and
    /// mid-session resize. Cancels before arming so no transition can
    /// leave two live schedules behind.
    fn begin_session(&mut self) {
        self.frame.cancel();
        self.spawner.cancel();

        self.state.reset();
        self.audio.set_enabled(self.settings.sound_enabled);

        self.overlay(Overlay::Start, false);
        self.overlay(Overlay::Pause, false);
        self.overlay(Overlay::GameOver, false);
        self.publish(TextField::Score, "0");
        self.publish(TextField::Level, "1");
        let best = self.scores.best().to_string();
        self.publish(TextField::HighScore, &best);

        self.frame.arm();
        self.spawner.arm(spawn::spawn_period_ms(self.state.level));
        self.state.phase = GamePhase::Active;
        log::info!(
            "session started ({}x{}, spawn period {}ms)",
            self.state.viewport.x,
            self.state.viewport.y,
            spawn::spawn_period_ms(self.state.level)
        );
    }

    /// Active -> Over: stop both schedules, settle the high score
    /// exactly once, and hand the summary to the presentation layer.
    fn finish_session(&mut self, score: u64) {
        self.frame.cancel();
        self.spawner.cancel();
        self.state.phase = GamePhase::Over;
        if self.scores.record(score) {
            let best = self.scores.best().to_string();
            self.publish(TextField::HighScore, &best);
            log::info!("new high score: {score}");
        }
        self.publish(TextField::FinalScore, &score.to_string());
        self.overlay(Overlay::GameOver, true);
        self.audio.play(SoundEffect::GameOver);
    }

    fn apply_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::DefenderHit { .. } => self.audio.play(SoundEffect::Hit),
            GameEvent::EnemyDestroyed { pos, score } => {
                self.audio.play(SoundEffect::Explosion);
                if let Err(err) = self.presentation.show_floating_label(
                    *pos,
                    &score.to_string(),
                    FLOATING_LABEL_FADE_MS,
                ) {
                    log::warn!("presentation fault: {err:#}");
                }
                let total = self.state.score.to_string();
                self.publish(TextField::Score, &total);
            }
            GameEvent::LevelUp { level } => {
                self.audio.play(SoundEffect::LevelUp);
                // The old cadence must not outlive the level change
                self.spawner.arm(spawn::spawn_period_ms(*level));
                self.publish(TextField::Level, &level.to_string());
                log::info!(
                    "level {} reached, spawn period now {}ms",
                    level,
                    spawn::spawn_period_ms(*level)
                );
            }
            GameEvent::DefenderDown { score } => self.finish_session(*score),
        }
    }

    // === Presentation helpers (faults are logged, never propagated) ===

    fn publish(&mut self, field: TextField, value: &str) {
        if let Err(err) = self.presentation.set_text(field, value) {
            log::warn!("presentation fault: {err:#}");
        }
    }

    fn overlay(&mut self, overlay: Overlay, visible: bool) {
        let result = if visible {
            self.presentation.show_overlay(overlay)
        } else {
            self.presentation.hide_overlay(overlay)
        };
        if let Err(err) = result {
            log::warn!("presentation fault: {err:#}");
        }
    }
}
