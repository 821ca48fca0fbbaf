//! Storage Module
//!
//! Bulk persistence of fixed-size records.
//!
//! ## Responsibilities
//! - Create or truncate a record file and write records in order
//! - Read whole records back into a caller-sized buffer
//! - Tolerate a trailing partial record on read (logged, then ignored)

mod reader;
mod writer;

pub use reader::{read_records, RecordReader};
pub use writer::{write_records, RecordWriter};
