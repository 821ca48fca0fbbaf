//! Tests for the score override scan
//!
//! These tests verify:
//! - Only matching records are modified
//! - Found / not found reporting
//! - Custom rules and predicates

use recordfile::record::Record;
use recordfile::scan::{self, ScanReport, ScoreOverride, FOUND_MESSAGE, NOT_FOUND_MESSAGE};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Ann", 1, 90.5),
        Record::new("Bo", 2, 17.4),
        Record::new("Cy", 3, 67.2),
        Record::new("Di", 4, 81.3),
    ]
}

// =============================================================================
// Default Rule Tests
// =============================================================================

#[test]
fn test_default_rule() {
    let rule = ScoreOverride::default();
    assert_eq!(rule.target_id, 2);
    assert_eq!(rule.score, 100.0);
}

#[test]
fn test_only_matching_record_changes() {
    let original = sample_records();
    let mut records = original.clone();

    let report = scan::apply(&mut records, &ScoreOverride::default());

    assert_eq!(report.scanned, 4);
    assert_eq!(report.matched, vec![1]);
    assert_eq!(records[1].score, 100.0);
    for i in [0, 2, 3] {
        assert_eq!(records[i], original[i]);
    }
    assert_eq!(records[1].name, original[1].name);
    assert_eq!(records[1].id, 2);
}

#[test]
fn test_found_summary() {
    let mut records = sample_records();
    let report = scan::apply(&mut records, &ScoreOverride::default());

    assert!(report.found());
    assert_eq!(report.summary(), FOUND_MESSAGE);
}

#[test]
fn test_not_found_summary() {
    let original: Vec<Record> = sample_records()
        .into_iter()
        .filter(|r| r.id != 2)
        .collect();
    let mut records = original.clone();

    let report = scan::apply(&mut records, &ScoreOverride::default());

    assert!(!report.found());
    assert_eq!(report.summary(), NOT_FOUND_MESSAGE);
    assert_eq!(records, original);
}

#[test]
fn test_duplicate_ids_all_updated() {
    let mut records = vec![
        Record::new("x", 2, 1.0),
        Record::new("y", 5, 2.0),
        Record::new("z", 2, 3.0),
    ];

    let report = scan::apply(&mut records, &ScoreOverride::default());

    assert_eq!(report.matched, vec![0, 2]);
    assert_eq!(records[0].score, 100.0);
    assert_eq!(records[1].score, 2.0);
    assert_eq!(records[2].score, 100.0);
}

#[test]
fn test_empty_slice() {
    let mut records: Vec<Record> = Vec::new();
    let report = scan::apply(&mut records, &ScoreOverride::default());
    assert_eq!(report, ScanReport::default());
    assert!(!report.found());
}

// =============================================================================
// Custom Rule Tests
// =============================================================================

#[test]
fn test_custom_rule() {
    let mut records = sample_records();
    let report = scan::apply(&mut records, &ScoreOverride::new(4, 0.0));

    assert_eq!(report.matched, vec![3]);
    assert_eq!(records[3].score, 0.0);
    assert_eq!(records[1].score, 17.4);
}

#[test]
fn test_custom_predicate() {
    let mut records = sample_records();
    let report = scan::apply_with(&mut records, |r| r.score < 70.0, 70.0);

    assert_eq!(report.matched, vec![1, 2]);
    assert!(records.iter().all(|r| r.score >= 70.0));
}
