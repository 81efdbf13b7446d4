use super::GameOverReport;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The single persisted slot holding the best Snake score.
pub trait HighScoreStore {
    fn load(&self) -> Result<u32>;

    fn save(&mut self, score: u32) -> Result<()>;
}

/// Keeps the score in memory; counts writes so callers can check when saving happened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    score: u32,
    writes: usize,
}

impl MemoryStore {
    pub fn with_score(score: u32) -> Self {
        Self { score, writes: 0 }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score = score;
        self.writes += 1;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct HighScoreFile {
    snake_high_score: u32,
}

/// Stores `{"snake_high_score": N}` in a JSON file. A missing file reads as 0.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let file: HighScoreFile = serde_json::from_slice(&data)?;
        Ok(file.snake_high_score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        let data = serde_json::to_vec_pretty(&HighScoreFile {
            snake_high_score: score,
        })?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Reads the stored high score once at startup; unreadable storage counts as 0.
pub fn load_high_score(store: &dyn HighScoreStore) -> u32 {
    store.load().unwrap_or_else(|e| {
        log::warn!("failed to read the high score, starting from 0: {e}");
        0
    })
}

/// Writes the score of a finished game if it beat the stored one.
///
/// Returns whether the store was written.
pub fn record_high_score(store: &mut dyn HighScoreStore, report: &GameOverReport) -> bool {
    if !report.new_high_score {
        return false;
    }
    match store.save(report.score) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to save high score {}: {e}", report.score);
            false
        }
    }
}
