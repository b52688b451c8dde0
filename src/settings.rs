//! Player preferences
//!
//! Persisted as a small JSON file; anything missing or corrupt falls
//! back to defaults so a bad file can never block a session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::MAX_PARTICLES;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Sound effects on/off (the sound-toggle input flips this)
    pub sound_enabled: bool,
    /// Cap on live particles
    pub max_particles: usize,
    /// Fixed seed for reproducible runs; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            max_particles: MAX_PARTICLES,
            seed: None,
        }
    }
}

impl Settings {
    /// Load from a JSON file; any failure falls back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file corrupt ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save to a JSON file; failures are logged and swallowed
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("settings serialization failed: {err}");
                return;
            }
        };
        match fs::write(path, json) {
            Ok(()) => log::info!("settings saved"),
            Err(err) => log::warn!("settings save failed: {err}"),
        }
    }
}
