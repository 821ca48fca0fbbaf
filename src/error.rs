//! Error types for recordfile
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RecordError
pub type Result<T> = std::result::Result<T, RecordError>;

/// Unified error type for record file operations
#[derive(Debug, Error)]
pub enum RecordError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Name too long: {len} bytes (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl RecordError {
    /// Wrap an open failure with the path that caused it
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RecordError::Open {
            path: path.into(),
            source,
        }
    }
}
