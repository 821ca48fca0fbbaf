//! Record Reader
//!
//! Reads records from a record file into a caller-provided buffer.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{RecordError, Result};
use crate::record::{codec, Record, RECORD_SIZE};

/// Sequential reader over a record file
pub struct RecordReader {
    path: PathBuf,
    file: BufReader<File>,
    /// File length at open time
    file_size: u64,
}

impl RecordReader {
    /// Open a record file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| RecordError::open(path, e))?;
        let file_size = file.metadata()?.len();

        tracing::debug!(path = %path.display(), bytes = file_size, "Opened record file for reading");

        Ok(Self {
            path: path.to_path_buf(),
            file: BufReader::new(file),
            file_size,
        })
    }

    /// Number of whole records in the file
    pub fn record_count(&self) -> u64 {
        self.file_size / RECORD_SIZE as u64
    }

    /// Whether the file ends with a partial record
    pub fn has_trailing_bytes(&self) -> bool {
        self.file_size % RECORD_SIZE as u64 != 0
    }

    /// Read the next record, `None` at end of file
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        codec::read_record(&mut self.file)
    }

    /// Fill `buf` from the front with records, stopping at end of file
    ///
    /// Returns how many slots were filled; the rest of `buf` is untouched.
    pub fn read_into(&mut self, buf: &mut [Record]) -> Result<usize> {
        let mut filled = 0;
        for slot in buf.iter_mut() {
            match self.next_record()? {
                Some(record) => {
                    *slot = record;
                    filled += 1;
                }
                None => break,
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            requested = buf.len(),
            read = filled,
            "Read records"
        );

        Ok(filled)
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Read up to `buf.len()` records from `path` into `buf`
///
/// On open failure `buf` is left unmodified.
pub fn read_records(path: &Path, buf: &mut [Record]) -> Result<usize> {
    let mut reader = RecordReader::open(path)?;
    reader.read_into(buf)
}
