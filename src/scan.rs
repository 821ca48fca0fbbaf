//! Scan Module
//!
//! Post-read pass that overrides the score of matching records in memory.
//! Nothing here touches the file.

use crate::record::Record;

/// Line reported when at least one record matched
pub const FOUND_MESSAGE: &str = "Record Updated Successfully.";

/// Line reported when no record matched
pub const NOT_FOUND_MESSAGE: &str = "Record not found.";

/// Sets `score` on every record whose id equals `target_id`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOverride {
    pub target_id: i32,
    pub score: f32,
}

impl Default for ScoreOverride {
    fn default() -> Self {
        Self {
            target_id: 2,
            score: 100.0,
        }
    }
}

impl ScoreOverride {
    pub fn new(target_id: i32, score: f32) -> Self {
        Self { target_id, score }
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.id == self.target_id
    }
}

/// Outcome of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Records visited
    pub scanned: usize,
    /// Indices of records whose score was overridden
    pub matched: Vec<usize>,
}

impl ScanReport {
    pub fn found(&self) -> bool {
        !self.matched.is_empty()
    }

    /// The found / not found line
    pub fn summary(&self) -> &'static str {
        if self.found() {
            FOUND_MESSAGE
        } else {
            NOT_FOUND_MESSAGE
        }
    }
}

/// Apply `rule` to every record in `records`
pub fn apply(records: &mut [Record], rule: &ScoreOverride) -> ScanReport {
    apply_with(records, |r| rule.matches(r), rule.score)
}

/// Set `score` on every record for which `predicate` holds
pub fn apply_with<P>(records: &mut [Record], predicate: P, score: f32) -> ScanReport
where
    P: Fn(&Record) -> bool,
{
    let mut report = ScanReport {
        scanned: records.len(),
        matched: Vec::new(),
    };

    for (index, record) in records.iter_mut().enumerate() {
        if predicate(record) {
            record.score = score;
            report.matched.push(index);
        }
    }

    tracing::debug!(
        scanned = report.scanned,
        matched = report.matched.len(),
        "Applied score override"
    );

    report
}
