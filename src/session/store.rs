//! Best-score persistence.
//!
//! The session only needs a single named integer that survives restarts.
//! [`BestScoreStore`] is that seam; its methods never fail from the
//! caller's point of view. A store that cannot read reports 0, and a
//! store that cannot write logs and moves on.
//!
//! ## Implementations
//!
//! - [`JsonFileStore`]: `{"best_score": N}` in a JSON file
//! - [`MemoryStore`]: in-process only, for tests and headless use

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name the JSON store uses in the user's home directory.
pub const DEFAULT_FILE_NAME: &str = ".2048_best_score.json";

/// Storage for the best score ever reached.
pub trait BestScoreStore {
    /// The stored best score, or 0 when there is no readable record.
    fn load(&self) -> u64;

    /// Persist `score`. Best effort: failures are not reported.
    fn save(&mut self, score: u64);

    /// Whether a record has ever been written.
    fn has_record(&self) -> bool;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed best-score record: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk record layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    #[serde(default)]
    pub best_score: u64,
}

/// Keeps the best score as JSON in a single file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.2048_best_score.json`.
    ///
    /// Returns `None` when no home directory can be determined.
    #[must_use]
    pub fn in_home_dir() -> Option<Self> {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .filter(|h| !h.is_empty())?;
        Some(Self::new(Path::new(&home).join(DEFAULT_FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, surfacing every failure.
    pub fn read_record(&self) -> Result<BestScoreRecord, StoreError> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write the record, surfacing every failure.
    pub fn write_record(&self, record: BestScoreRecord) -> Result<(), StoreError> {
        let json = serde_json::to_vec(&record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> u64 {
        match self.read_record() {
            Ok(record) => record.best_score,
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!("could not read best score from {}: {e}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u64) {
        if let Err(e) = self.write_record(BestScoreRecord { best_score: score }) {
            warn!("could not save best score to {}: {e}", self.path.display());
        }
    }

    fn has_record(&self) -> bool {
        self.path.exists()
    }
}

/// Best score held in memory only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    record: Option<u64>,
}

impl MemoryStore {
    /// An empty store with no record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `score`.
    #[must_use]
    pub fn with_record(score: u64) -> Self {
        Self { record: Some(score) }
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.record.unwrap_or(0)
    }

    fn save(&mut self, score: u64) {
        self.record = Some(score);
    }

    fn has_record(&self) -> bool {
        self.record.is_some()
    }
}
