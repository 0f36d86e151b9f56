//! Eviction decision logic
//!
//! A submission is evicted once its indexing timestamp is older than the
//! retention window. Age compares at whole-day granularity: an entry
//! stored earlier the same day survives a zero-day threshold, and "older
//! than N days" means the truncated age strictly exceeds N. Entries whose
//! timestamp is missing or unparseable are never evicted.

use chrono::{DateTime, Utc};

use crate::metadata::SubmissionMeta;

/// Outcome of evaluating one entry against the retention window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDecision {
    /// Entry is within the retention window
    Keep,
    /// Entry aged out and should be deleted
    Evict,
    /// `date_indexed` is absent or empty; entry retained, reported as a warning
    MissingTimestamp,
    /// `date_indexed` failed to parse; entry retained, reported as a warning
    UnparseableTimestamp {
        /// Why the timestamp was rejected
        reason: chrono::ParseError,
    },
}

/// Evaluate one entry against a retention window ending at `now`
///
/// Clock skew into the future yields a negative age and never evicts.
pub fn sweep_decision(
    meta: &SubmissionMeta,
    now: DateTime<Utc>,
    threshold_days: u32,
) -> SweepDecision {
    let raw = match meta.date_indexed.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return SweepDecision::MissingTimestamp,
    };

    let date_indexed = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(reason) => return SweepDecision::UnparseableTimestamp { reason },
    };

    let age_days = now.signed_duration_since(date_indexed).num_days();
    if age_days > i64::from(threshold_days) {
        SweepDecision::Evict
    } else {
        SweepDecision::Keep
    }
}
