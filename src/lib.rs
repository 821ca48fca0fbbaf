//! # recordfile
//!
//! Fixed-size binary record files:
//! - Bulk write of name/id/score records to a flat file
//! - Bulk read back into a caller-sized buffer
//! - In-memory score override for records matching an id
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  RecordFile (store)                          │
//! └───────────┬───────────────────────────────┬─────────────────┘
//!             │                               │
//!             ▼                               ▼
//!   ┌──────────────────┐            ┌──────────────────┐
//!   │  RecordWriter    │            │  RecordReader    │
//!   │ (create/truncate)│            │ (read into buf)  │
//!   └────────┬─────────┘            └────────┬─────────┘
//!            │                               │
//!            ▼                               ▼
//!   ┌─────────────────────────────────────────────────┐
//!   │        record::codec (36-byte layout)           │
//!   └─────────────────────────────────────────────────┘
//!                                            │
//!                                            ▼
//!                                   ┌──────────────────┐
//!                                   │ scan (override)  │
//!                                   └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod scan;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RecordError, Result};
pub use config::Config;
pub use record::{FixedName, Record};
pub use scan::{ScanReport, ScoreOverride};
pub use store::RecordFile;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recordfile
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
