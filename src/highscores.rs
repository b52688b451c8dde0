//! High score persistence
//!
//! One best score per install, updated only when a finished session
//! beats it. The storage behind the [`ScoreStore`] seam is a keyed blob
//! the core never interprets beyond "the previous best"; a missing or
//! failing store degrades to an unpersisted zero rather than taking the
//! game down.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures at the persistence seam
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score storage I/O: {0}")]
    Io(#[from] io::Error),
    #[error("high score record corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key-value capability for the persisted best score
pub trait ScoreStore {
    /// Previous best, or `None` when nothing was ever stored
    fn load(&mut self) -> Result<Option<u64>, StoreError>;
    fn save(&mut self, score: u64) -> Result<(), StoreError>;
}

/// Persisted record envelope
#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    high_score: u64,
}

/// Best score kept as a small JSON file next to the game
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record: ScoreRecord = serde_json::from_str(&json)?;
        Ok(Some(record.high_score))
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        let json = serde_json::to_string(&ScoreRecord { high_score: score })?;
        fs::write(&self.path, json)?;
        log::info!("high score saved: {score}");
        Ok(())
    }
}

/// In-memory store for tests and for score-keeping without persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: Option<u64>,
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        self.best = Some(score);
        Ok(())
    }
}

/// Session-facing view over a store: caches the best score and persists
/// only when a session actually beats it.
pub struct HighScoreBoard<S> {
    store: Option<S>,
    best: u64,
}

impl<S: ScoreStore> HighScoreBoard<S> {
    /// Load the previous best. A missing or failing store degrades to 0.
    pub fn new(mut store: Option<S>) -> Self {
        let best = match store.as_mut().map(ScoreStore::load) {
            Some(Ok(Some(best))) => best,
            Some(Ok(None)) | None => 0,
            Some(Err(err)) => {
                log::warn!("high score load failed, starting from zero: {err}");
                0
            }
        };
        Self { store, best }
    }

    #[must_use]
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Settle a finished session. Returns true when the score beat the
    /// old best; persistence happens then and only then, store
    /// permitting.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Some(store) = self.store.as_mut() {
            if let Err(err) = store.save(score) {
                log::warn!("high score save failed: {err}");
            }
        }
        true
    }
}
