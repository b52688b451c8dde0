//! Fire-and-forget sound effects
//!
//! The core never synthesizes audio; it names an effect and moves on.
//! A backend is optional - a missing one degrades to silence - and the
//! whole catalogue can be gated off at runtime with the sound toggle.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Projectile fired
    Shoot,
    /// Enemy destroyed by a projectile
    Explosion,
    /// Level threshold crossed
    LevelUp,
    /// Session ended
    GameOver,
    /// Enemy reached the defender
    Hit,
}

/// Something that can emit an effect right now, without blocking
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect);
}

/// Backend that stays silent; for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Gate in front of the backend: effects are silently dropped while
/// disabled, and an absent backend degrades to silence.
pub struct AudioManager<B> {
    backend: Option<B>,
    enabled: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: Option<B>) -> Self {
        if backend.is_none() {
            log::warn!("no audio backend configured - effects disabled");
        }
        Self {
            backend,
            enabled: true,
        }
    }

    /// Mute or unmute every effect
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Play an effect; a no-op while disabled or without a backend
    pub fn play(&mut self, effect: SoundEffect) {
        if !self.enabled {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.play(effect);
        }
    }
}
