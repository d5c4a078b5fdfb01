//! Change deltas between the two most recent records.
//!
//! Two policies live side by side here and must stay separate:
//! body composition deltas treat a missing value as unknown, fitness deltas
//! treat it as 0.

use gymhealth_core::Direction;
use serde::{Deserialize, Serialize};

/// Signed change from `previous` to `current`.
///
/// `None` when there is no previous value, or the previous value is zero
/// (treated as "never measured").
pub fn compute_delta(current: f64, previous: Option<f64>) -> Option<f64> {
    match previous {
        Some(prev) if prev != 0.0 => Some(current - prev),
        _ => None,
    }
}

/// Delta for a body measurement: both sides must be known.
pub fn measurement_delta(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    Some(current? - previous?)
}

/// Delta for a fitness metric: missing values count as 0.
pub fn fitness_delta(current: Option<f64>, previous: Option<f64>) -> f64 {
    current.unwrap_or(0.0) - previous.unwrap_or(0.0)
}

/// Format a change with an explicit `+` for positive values and one decimal.
pub fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.1}", change)
    } else {
        format!("{:.1}", change)
    }
}

/// Format an optional delta; absent deltas render as an empty string.
pub fn format_delta(delta: Option<f64>) -> String {
    delta.map(format_change).unwrap_or_default()
}

/// How a change reads for the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Moved in the favorable direction
    Improved,
    /// Moved against the favorable direction
    Worsened,
    /// No change
    Unchanged,
}

impl Trend {
    /// Classify a delta for a metric whose favorable direction is `direction`.
    pub fn classify(direction: Direction, delta: f64) -> Self {
        if delta == 0.0 {
            return Trend::Unchanged;
        }
        match (direction, delta < 0.0) {
            (Direction::Lower, true) | (Direction::Higher, false) => Trend::Improved,
            _ => Trend::Worsened,
        }
    }
}
