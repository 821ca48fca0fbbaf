//! Tests for Record encoding and the fixed name field
//!
//! These tests verify:
//! - Byte layout of an encoded record
//! - Name truncation policy
//! - Decoding of files produced by the 36-byte C struct layout

use recordfile::record::codec::{decode_record, encode_record};
use recordfile::record::{FixedName, Record, MAX_NAME_LEN, NAME_CAPACITY, RECORD_SIZE};
use recordfile::RecordError;

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_encoded_size_is_fixed() {
    let short = encode_record(&Record::new("A", 1, 1.0));
    let long = encode_record(&Record::new(&"B".repeat(40), 2, 2.0));
    assert_eq!(short.len(), RECORD_SIZE);
    assert_eq!(long.len(), RECORD_SIZE);
}

#[test]
fn test_decode_hand_built_record() {
    // name "Di" NUL-padded to 25, 3 padding bytes, id 4, score 81.3
    let mut raw = Vec::with_capacity(RECORD_SIZE);
    raw.extend_from_slice(b"Di");
    raw.resize(NAME_CAPACITY + 3, 0);
    raw.extend_from_slice(&4i32.to_le_bytes());
    raw.extend_from_slice(&81.3f32.to_le_bytes());

    let record = decode_record(&raw).unwrap();
    assert_eq!(record.name.as_str(), "Di");
    assert_eq!(record.id, 4);
    assert_eq!(record.score, 81.3f32);
}

#[test]
fn test_decode_uses_only_first_record() {
    let mut raw = encode_record(&Record::new("Ann", 1, 90.5)).to_vec();
    raw.extend_from_slice(&encode_record(&Record::new("Bo", 2, 17.4)));

    assert_eq!(decode_record(&raw).unwrap(), Record::new("Ann", 1, 90.5));
}

#[test]
fn test_decode_empty_input_fails() {
    assert!(matches!(decode_record(&[]), Err(RecordError::Decode(_))));
}

// =============================================================================
// Name Policy Tests
// =============================================================================

#[test]
fn test_record_new_truncates_long_name() {
    let record = Record::new("Hashmatullah Ishan Rahimi Klie", 2, 17.45);
    assert_eq!(record.name.len(), MAX_NAME_LEN);
    assert_eq!(record.name.as_str(), "Hashmatullah Ishan Rahim");
}

#[test]
fn test_truncated_name_survives_encoding() {
    let record = Record::new(&"q".repeat(100), 9, 9.0);
    let decoded = decode_record(&encode_record(&record)).unwrap();
    assert_eq!(decoded.name, record.name);
    assert_eq!(decoded.name.len(), MAX_NAME_LEN);
}

#[test]
fn test_try_new_accepts_exact_fit() {
    let name = FixedName::try_new("Rustam Hayat Elbegi").unwrap();
    assert_eq!(name.to_string(), "Rustam Hayat Elbegi");
}

#[test]
fn test_try_new_error_message() {
    let err = FixedName::try_new(&"n".repeat(30)).unwrap_err();
    assert_eq!(err.to_string(), "Name too long: 30 bytes (max 24)");
}

#[test]
fn test_name_from_str() {
    let name: FixedName = "Cy".into();
    assert_eq!(name, FixedName::new("Cy"));
}
