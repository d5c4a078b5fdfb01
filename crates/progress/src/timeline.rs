//! Ordering and time-window filtering.

use chrono::{Duration, NaiveDate};
use gymhealth_core::{ProgressRecord, TimeRange};

/// Sort latest first. Stable: equal dates keep their input order.
pub fn sort_descending_by_date(mut records: Vec<ProgressRecord>) -> Vec<ProgressRecord> {
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Sort oldest first. Stable: equal dates keep their input order.
pub fn sort_ascending_by_date(mut records: Vec<ProgressRecord>) -> Vec<ProgressRecord> {
    records.sort_by(|a, b| a.date.cmp(&b.date));
    records
}

/// Keep records inside `range`, counted back from `now`.
///
/// The lower bound is inclusive: a record dated exactly 7 days before `now`
/// is still in [`TimeRange::Week`]. [`TimeRange::All`] returns the input
/// unchanged. Input order is preserved.
pub fn filter_by_time_range(
    records: &[ProgressRecord],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<ProgressRecord> {
    let Some(days) = range.days() else {
        return records.to_vec();
    };

    // a window reaching past the calendar start keeps everything
    let Some(cutoff) = now.checked_sub_signed(Duration::days(days)) else {
        return records.to_vec();
    };
    records
        .iter()
        .filter(|r| r.date >= cutoff)
        .cloned()
        .collect()
}
