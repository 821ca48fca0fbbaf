//! Record codec
//!
//! Encoding and decoding of single records, plus stream helpers.
//! See the module docs in `record` for the byte layout.

use std::io::{self, Read, Write};

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{RecordError, Result};

use super::{FixedName, Record, NAME_CAPACITY, PADDING_SIZE, RECORD_SIZE};

// =============================================================================
// Record Encoding/Decoding
// =============================================================================

/// Append one encoded record to `buf`
pub fn encode_into(record: &Record, buf: &mut BytesMut) {
    buf.reserve(RECORD_SIZE);
    buf.put_slice(record.name.as_bytes());
    buf.put_bytes(0, PADDING_SIZE);
    buf.put_i32_le(record.id);
    buf.put_f32_le(record.score);
}

/// Encode a record to its fixed-size byte form
pub fn encode_record(record: &Record) -> [u8; RECORD_SIZE] {
    let mut buf = BytesMut::with_capacity(RECORD_SIZE);
    encode_into(record, &mut buf);

    let mut out = [0u8; RECORD_SIZE];
    out.copy_from_slice(&buf);
    out
}

/// Decode a record from the first `RECORD_SIZE` bytes of `bytes`
pub fn decode_record(bytes: &[u8]) -> Result<Record> {
    if bytes.len() < RECORD_SIZE {
        return Err(RecordError::Decode(format!(
            "Incomplete record: expected {} bytes, got {}",
            RECORD_SIZE,
            bytes.len()
        )));
    }

    let mut buf = &bytes[..RECORD_SIZE];

    let mut name = [0u8; NAME_CAPACITY];
    buf.copy_to_slice(&mut name);
    buf.advance(PADDING_SIZE);
    let id = buf.get_i32_le();
    let score = buf.get_f32_le();

    Ok(Record {
        name: FixedName::from_bytes(name),
        id,
        score,
    })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one record from a stream
///
/// Returns `Ok(None)` on a clean end of stream. A stream that ends partway
/// through a record also yields `Ok(None)`; the partial bytes are dropped.
pub fn read_record<R: Read>(reader: &mut R) -> Result<Option<Record>> {
    let mut raw = [0u8; RECORD_SIZE];
    let mut filled = 0;

    while filled < RECORD_SIZE {
        match reader.read(&mut raw[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    match filled {
        0 => Ok(None),
        RECORD_SIZE => decode_record(&raw).map(Some),
        partial => {
            tracing::warn!(
                bytes = partial,
                expected = RECORD_SIZE,
                "Ignoring trailing partial record"
            );
            Ok(None)
        }
    }
}

/// Write one record to a stream
pub fn write_record<W: Write>(writer: &mut W, record: &Record) -> Result<()> {
    writer.write_all(&encode_record(record))?;
    Ok(())
}
