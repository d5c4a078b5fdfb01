//! Chart-ready trend series.
//!
//! Missing values are drawn as 0 here. That default is for charts only;
//! deltas never see it.

use chrono::{Datelike, NaiveDate};
use gymhealth_core::{Metric, ProgressRecord};
use serde::{Deserialize, Serialize};

/// Points on the overview composition chart.
pub const OVERVIEW_CHART_POINTS: usize = 10;

/// Points on the body and fitness breakdown charts.
pub const BREAKDOWN_CHART_POINTS: usize = 5;

/// Points on the detail screen history charts.
pub const HISTORY_CHART_POINTS: usize = 7;

/// Label of the single point drawn when there is nothing to chart.
pub const NO_DATA_LABEL: &str = "No data";

/// Labels plus one dataset per metric, oldest point first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// One `D/M` label per point
    pub labels: Vec<String>,
    /// One dataset per requested metric, same length as `labels`
    pub datasets: Vec<Dataset>,
}

/// A single chart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Metric plotted
    pub metric: Metric,
    /// Values, oldest first
    pub data: Vec<f64>,
}

impl TrendSeries {
    /// The dataset for `metric`, if requested.
    pub fn dataset(&self, metric: Metric) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.metric == metric)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether this is the single "no data" point built for an empty input.
    pub fn is_placeholder(&self) -> bool {
        self.labels.len() == 1 && self.labels[0] == NO_DATA_LABEL
    }

    fn placeholder(fields: &[Metric]) -> Self {
        Self {
            labels: vec![NO_DATA_LABEL.to_string()],
            datasets: fields
                .iter()
                .map(|&metric| Dataset { metric, data: vec![0.0] })
                .collect(),
        }
    }
}

/// Build a trend series from latest-first records.
///
/// Takes the `max_points` most recent records and reverses them into
/// chronological order. An empty input yields a single placeholder point so
/// chart renderers never see an empty series.
pub fn build_trend_series(
    records: &[ProgressRecord],
    max_points: usize,
    fields: &[Metric],
) -> TrendSeries {
    let recent: Vec<&ProgressRecord> = records.iter().take(max_points).collect();
    if recent.is_empty() {
        return TrendSeries::placeholder(fields);
    }

    let chronological: Vec<&ProgressRecord> = recent.into_iter().rev().collect();
    series_from(&chronological, fields)
}

/// Build a history chart from oldest-first records.
///
/// Uses the last `max_points` records. `None` with fewer than two records,
/// since a single point is not a trend.
pub fn history_series(
    ascending: &[ProgressRecord],
    max_points: usize,
    fields: &[Metric],
) -> Option<TrendSeries> {
    if ascending.len() < 2 {
        return None;
    }
    let start = ascending.len().saturating_sub(max_points);
    let window: Vec<&ProgressRecord> = ascending[start..].iter().collect();
    Some(series_from(&window, fields))
}

/// Short `D/M` chart label.
pub fn chart_label(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), date.month())
}

fn series_from(records: &[&ProgressRecord], fields: &[Metric]) -> TrendSeries {
    TrendSeries {
        labels: records.iter().map(|r| chart_label(r.date)).collect(),
        datasets: fields
            .iter()
            .map(|&metric| Dataset {
                metric,
                data: records.iter().map(|r| r.value(metric).unwrap_or(0.0)).collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymhealth_core::RecordId;

    fn record(id: u64, month: u32, weight: Option<f64>) -> ProgressRecord {
        let mut r = ProgressRecord::new(
            RecordId::new(id),
            NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
        );
        r.weight = weight;
        r
    }

    #[test]
    fn test_empty_input_yields_placeholder() {
        let series = build_trend_series(&[], 10, &Metric::COMPOSITION);
        assert_eq!(series.labels, vec![NO_DATA_LABEL.to_string()]);
        assert!(series.is_placeholder());
        assert_eq!(series.datasets.len(), 3);
        assert!(series.datasets.iter().all(|d| d.data == vec![0.0]));
    }

    #[test]
    fn test_series_is_chronological_and_capped() {
        // latest first
        let records: Vec<_> = (1..=12).rev().map(|m| record(m as u64, m, Some(70.0 + m as f64))).collect();
        let series = build_trend_series(&records, 10, &[Metric::Weight]);

        assert_eq!(series.len(), 10);
        assert_eq!(series.labels.first().map(String::as_str), Some("1/3"));
        assert_eq!(series.labels.last().map(String::as_str), Some("1/12"));
        let weights = &series.dataset(Metric::Weight).unwrap().data;
        assert_eq!(weights.first(), Some(&73.0));
        assert_eq!(weights.last(), Some(&82.0));
    }

    #[test]
    fn test_missing_values_chart_as_zero() {
        let records = vec![record(2, 2, None), record(1, 1, Some(80.0))];
        let series = build_trend_series(&records, 5, &[Metric::Weight, Metric::Chest]);
        assert_eq!(series.dataset(Metric::Weight).unwrap().data, vec![80.0, 0.0]);
        assert_eq!(series.dataset(Metric::Chest).unwrap().data, vec![0.0, 0.0]);
    }

    #[test]
    fn test_history_series_uses_latest_window() {
        let ascending: Vec<_> = (1..=9).map(|m| record(m as u64, m, Some(m as f64))).collect();
        let series = history_series(&ascending, HISTORY_CHART_POINTS, &[Metric::Weight]).unwrap();
        assert_eq!(series.len(), 7);
        assert_eq!(series.dataset(Metric::Weight).unwrap().data.first(), Some(&3.0));

        assert!(history_series(&ascending[..1], HISTORY_CHART_POINTS, &[Metric::Weight]).is_none());
    }
}
