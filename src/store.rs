//! Store Module
//!
//! `RecordFile` ties a configured path to the writer, the reader and the
//! score override scan.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::record::Record;
use crate::scan::{self, ScanReport, ScoreOverride};
use crate::storage::{self, RecordReader};

/// A record file bound to a path and a scan rule
#[derive(Debug, Clone)]
pub struct RecordFile {
    config: Config,
}

impl RecordFile {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the file contents with `records`
    pub fn write(&self, records: &[Record]) -> Result<usize> {
        storage::write_records(&self.config.path, records)
    }

    /// Read up to `buf.len()` records into `buf`
    pub fn read_into(&self, buf: &mut [Record]) -> Result<usize> {
        storage::read_records(&self.config.path, buf)
    }

    /// Read up to `count` records into a fresh vector
    ///
    /// The file is opened before anything is allocated, and the vector is
    /// sized by the records the file actually holds, not by `count`.
    pub fn load(&self, count: usize) -> Result<Vec<Record>> {
        let mut reader = RecordReader::open(&self.config.path)?;
        let available = usize::try_from(reader.record_count()).unwrap_or(usize::MAX);

        let mut records = vec![Record::default(); count.min(available)];
        let read = reader.read_into(&mut records)?;
        records.truncate(read);
        Ok(records)
    }

    /// Load up to `count` records and apply the configured rule to them
    pub fn load_and_update(&self, count: usize) -> Result<(Vec<Record>, ScanReport)> {
        let mut records = self.load(count)?;
        let report = scan::apply(&mut records, &self.config.score_override);
        Ok((records, report))
    }

    /// Read into `buf`, then apply the configured rule to the records read
    ///
    /// Slots past the records read are neither scanned nor modified.
    pub fn read_and_update(&self, buf: &mut [Record]) -> Result<ScanReport> {
        let read = self.read_into(buf)?;
        Ok(scan::apply(&mut buf[..read], &self.config.score_override))
    }

    pub fn score_override(&self) -> &ScoreOverride {
        &self.config.score_override
    }
}
