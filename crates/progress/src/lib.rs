//! Progress Aggregator
//!
//! Turns raw API records into normalized records, time-filtered subsets,
//! chart-ready series and change deltas. Everything here is pure: no I/O,
//! no wall clock.

#![warn(missing_docs)]

pub mod normalize;
pub mod timeline;
pub mod delta;
pub mod bmi;
pub mod trend;
pub mod summary;

pub use normalize::{normalize, normalize_record, parse_record_date};
pub use timeline::{sort_descending_by_date, sort_ascending_by_date, filter_by_time_range};
pub use delta::{compute_delta, format_delta, format_change, fitness_delta, measurement_delta, Trend};
pub use bmi::{compute_bmi, record_bmi, bmi_delta};
pub use trend::{
    build_trend_series, history_series, chart_label, TrendSeries, Dataset,
    OVERVIEW_CHART_POINTS, BREAKDOWN_CHART_POINTS, HISTORY_CHART_POINTS, NO_DATA_LABEL,
};
pub use summary::{OverviewSummary, MetricChange, BmiSummary};
