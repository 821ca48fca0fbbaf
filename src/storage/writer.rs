//! Record Writer
//!
//! Writes records to a new (or truncated) record file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bytes::BytesMut;

use crate::error::{RecordError, Result};
use crate::record::{codec, Record, RECORD_SIZE};

/// Writes fixed-size records in sequence order
pub struct RecordWriter {
    /// Output file path
    path: PathBuf,
    /// Buffered writer for performance
    writer: BufWriter<File>,
    /// Reused encode buffer
    scratch: BytesMut,
    /// Number of records written
    record_count: usize,
}

impl RecordWriter {
    /// Create the file, discarding any existing content
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| RecordError::open(path, e))?;

        tracing::debug!(path = %path.display(), "Opened record file for writing");

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            scratch: BytesMut::with_capacity(RECORD_SIZE),
            record_count: 0,
        })
    }

    /// Append one record
    pub fn append(&mut self, record: &Record) -> Result<()> {
        self.scratch.clear();
        codec::encode_into(record, &mut self.scratch);
        self.writer.write_all(&self.scratch)?;
        self.record_count += 1;
        Ok(())
    }

    /// Number of records appended so far
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Flush, sync and close the file, returning the record count
    pub fn finish(self) -> Result<usize> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;

        tracing::debug!(
            path = %self.path.display(),
            records = self.record_count,
            "Finished writing record file"
        );

        Ok(self.record_count)
    }
}

/// Write `records` to `path`, replacing whatever was there
pub fn write_records(path: &Path, records: &[Record]) -> Result<usize> {
    let mut writer = RecordWriter::create(path)?;
    for record in records {
        writer.append(record)?;
    }
    writer.finish()
}
