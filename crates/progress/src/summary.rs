//! Latest-versus-previous comparison shown on the overview.

use gymhealth_core::{BmiCategory, Metric, ProgressRecord};
use serde::{Deserialize, Serialize};

use crate::bmi::{bmi_delta, record_bmi};
use crate::delta::{compute_delta, fitness_delta, measurement_delta, Trend};

/// One metric of the latest record with its change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    /// Metric
    pub metric: Metric,
    /// Latest value (fitness metrics default to 0)
    pub value: Option<f64>,
    /// Change against the previous record
    pub delta: Option<f64>,
    /// Reading of the change
    pub trend: Option<Trend>,
}

impl MetricChange {
    fn new(metric: Metric, value: Option<f64>, delta: Option<f64>) -> Self {
        Self {
            metric,
            value,
            delta,
            trend: delta.map(|d| Trend::classify(metric.favorable_direction(), d)),
        }
    }
}

/// BMI of the latest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiSummary {
    /// BMI of the latest record
    pub value: f64,
    /// Classification of `value`
    pub category: BmiCategory,
    /// Change against the previous record
    pub delta: Option<f64>,
    /// Reading of the change
    pub trend: Option<Trend>,
}

/// Comparison of the latest record against the one before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    /// Most recent record
    pub latest: ProgressRecord,
    /// Record before it, if any
    pub previous: Option<ProgressRecord>,
    /// Weight, body fat, muscle mass
    pub composition: Vec<MetricChange>,
    /// BMI, when the latest record carries a height
    pub bmi: Option<BmiSummary>,
    /// Body measurements
    pub measurements: Vec<MetricChange>,
    /// Fitness metrics
    pub fitness: Vec<MetricChange>,
}

impl OverviewSummary {
    /// Build from latest-first records. `None` when there are none.
    pub fn build(records: &[ProgressRecord]) -> Option<Self> {
        let latest = records.first()?.clone();
        let previous = records.get(1).cloned();
        let prev = previous.as_ref();

        let composition = Metric::COMPOSITION
            .iter()
            .map(|&metric| {
                let value = latest.value(metric);
                let delta = value.and_then(|v| compute_delta(v, prev.and_then(|p| p.value(metric))));
                MetricChange::new(metric, value, delta)
            })
            .collect();

        let bmi = record_bmi(&latest).map(|value| {
            let delta = bmi_delta(&latest, prev);
            BmiSummary {
                value,
                category: BmiCategory::from_bmi(value),
                delta,
                trend: delta.map(|d| Trend::classify(BmiCategory::FAVORABLE, d)),
            }
        });

        let measurements = Metric::MEASUREMENTS
            .iter()
            .map(|&metric| {
                let value = latest.value(metric);
                let delta = prev.and_then(|p| measurement_delta(value, p.value(metric)));
                MetricChange::new(metric, value, delta)
            })
            .collect();

        let fitness = Metric::FITNESS
            .iter()
            .map(|&metric| {
                let value = latest.value(metric);
                let delta = prev.map(|p| fitness_delta(value, p.value(metric)));
                MetricChange::new(metric, Some(value.unwrap_or(0.0)), delta)
            })
            .collect();

        Some(Self {
            latest,
            previous,
            composition,
            bmi,
            measurements,
            fitness,
        })
    }

    /// Change entry for a metric.
    pub fn change(&self, metric: Metric) -> Option<&MetricChange> {
        self.composition
            .iter()
            .chain(&self.measurements)
            .chain(&self.fitness)
            .find(|c| c.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::format_delta;
    use crate::timeline::sort_descending_by_date;
    use chrono::NaiveDate;
    use gymhealth_core::RecordId;

    fn record(id: u64, date: &str) -> ProgressRecord {
        ProgressRecord::new(RecordId::new(id), date.parse::<NaiveDate>().unwrap())
    }

    #[test]
    fn test_empty_history_has_no_summary() {
        assert!(OverviewSummary::build(&[]).is_none());
    }

    #[test]
    fn test_weight_drop_reads_as_improvement() {
        let mut jan = record(1, "2024-01-01");
        jan.weight = Some(80.0);
        let mut feb = record(2, "2024-02-01");
        feb.weight = Some(78.0);

        let records = sort_descending_by_date(vec![jan, feb]);
        let summary = OverviewSummary::build(&records).unwrap();

        let weight = summary.change(Metric::Weight).unwrap();
        assert_eq!(weight.value, Some(78.0));
        assert_eq!(format_delta(weight.delta), "-2.0");
        assert_eq!(weight.trend, Some(Trend::Improved));
    }

    #[test]
    fn test_single_record_has_no_deltas() {
        let mut only = record(1, "2024-01-01");
        only.weight = Some(80.0);
        only.fitness.strength_bench = Some(60.0);

        let summary = OverviewSummary::build(&[only]).unwrap();
        assert!(summary.previous.is_none());
        assert!(summary.composition.iter().all(|c| c.delta.is_none()));
        assert!(summary.fitness.iter().all(|c| c.delta.is_none()));
        assert_eq!(summary.change(Metric::StrengthSquat).unwrap().value, Some(0.0));
    }

    #[test]
    fn test_composition_and_fitness_policies() {
        let mut latest = record(2, "2024-02-01");
        latest.muscle_mass = Some(40.0);
        latest.fitness.strength_bench = Some(70.0);
        latest.measurements.waist = Some(80.0);
        let mut previous = record(1, "2024-01-01");
        previous.muscle_mass = None;
        previous.fitness.strength_bench = None;
        previous.measurements.waist = Some(83.0);

        let summary = OverviewSummary::build(&[latest, previous]).unwrap();

        // unknown previous muscle mass: no delta
        assert_eq!(summary.change(Metric::MuscleMass).unwrap().delta, None);
        // unknown previous bench counts as 0
        let bench = summary.change(Metric::StrengthBench).unwrap();
        assert_eq!(bench.delta, Some(70.0));
        assert_eq!(bench.trend, Some(Trend::Improved));
        let waist = summary.change(Metric::Waist).unwrap();
        assert_eq!(waist.delta, Some(-3.0));
        assert_eq!(waist.trend, Some(Trend::Improved));
        assert_eq!(summary.change(Metric::Chest).unwrap().delta, None);
    }

    #[test]
    fn test_bmi_summary() {
        let mut latest = record(2, "2024-02-01");
        latest.weight = Some(70.0);
        latest.height = Some(175.0);
        let mut previous = record(1, "2024-01-01");
        previous.weight = Some(75.0);
        previous.height = Some(175.0);

        let summary = OverviewSummary::build(&[latest, previous]).unwrap();
        let bmi = summary.bmi.unwrap();
        assert_eq!(bmi.category, BmiCategory::Normal);
        assert!(bmi.delta.unwrap() < 0.0);
        assert_eq!(bmi.trend, Some(Trend::Improved));
    }
}
