//! Configuration for recordfile
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::scan::ScoreOverride;

/// Main configuration for a record file
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the binary record file
    pub path: PathBuf,

    /// Number of record slots the reader fills
    pub read_count: usize,

    // -------------------------------------------------------------------------
    // Scan Configuration
    // -------------------------------------------------------------------------
    /// Rule applied to records after a read
    pub score_override: ScoreOverride,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data.bin"),
            read_count: 4,
            score_override: ScoreOverride::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set how many record slots a read fills
    pub fn read_count(mut self, count: usize) -> Self {
        self.config.read_count = count;
        self
    }

    /// Set the identifier whose score gets overridden
    pub fn target_id(mut self, id: i32) -> Self {
        self.config.score_override.target_id = id;
        self
    }

    /// Set the score written into matching records
    pub fn override_score(mut self, score: f32) -> Self {
        self.config.score_override.score = score;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
