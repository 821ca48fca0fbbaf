//! Record Module
//!
//! The fixed-size record and its on-disk layout.
//!
//! ## Record Layout (36 bytes, little-endian)
//! ```text
//! ┌──────────────────────┬─────────────┬──────────┬─────────────┐
//! │ Name (25, NUL-padded)│ Padding (3) │ Id (i32) │ Score (f32) │
//! └──────────────────────┴─────────────┴──────────┴─────────────┘
//!   0                      25            28         32          36
//! ```
//!
//! Padding is written as zero and ignored on read. A file is N records
//! back to back with no header, length prefix or checksum.

mod name;
pub mod codec;

pub use name::{FixedName, MAX_NAME_LEN};

// =============================================================================
// Layout Constants
// =============================================================================

/// Capacity of the name field in bytes
pub const NAME_CAPACITY: usize = 25;

/// Bytes of zero padding after the name
pub const PADDING_SIZE: usize = 3;

/// Offset of the id field
pub const ID_OFFSET: usize = NAME_CAPACITY + PADDING_SIZE;

/// Offset of the score field
pub const SCORE_OFFSET: usize = ID_OFFSET + 4;

/// Size of one encoded record
pub const RECORD_SIZE: usize = SCORE_OFFSET + 4;

// =============================================================================
// Record
// =============================================================================

/// One name/id/score entry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Record {
    pub name: FixedName,
    /// Identifier, not required to be unique
    pub id: i32,
    pub score: f32,
}

impl Record {
    /// Create a record, truncating `name` to fit the name field
    pub fn new(name: &str, id: i32, score: f32) -> Self {
        Self {
            name: FixedName::new(name),
            id,
            score,
        }
    }

    /// One-line human readable form used by the read report
    pub fn describe(&self) -> String {
        format!(
            "Name: {}, Id: {} and Score: {:.2}",
            self.name, self.id, self.score
        )
    }
}
