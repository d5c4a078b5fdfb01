//! Body Mass Index derivation.

use gymhealth_core::ProgressRecord;

use crate::delta::compute_delta;

/// BMI from weight (kg) and height (cm).
///
/// `None` when the height is unknown or not positive.
pub fn compute_bmi(weight_kg: f64, height_cm: Option<f64>) -> Option<f64> {
    let height_cm = height_cm.filter(|h| *h > 0.0)?;
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// BMI of a record, from its own weight and height.
pub fn record_bmi(record: &ProgressRecord) -> Option<f64> {
    compute_bmi(record.weight?, record.height)
}

/// BMI change between two records. Each side uses its own height.
pub fn bmi_delta(latest: &ProgressRecord, previous: Option<&ProgressRecord>) -> Option<f64> {
    let current = record_bmi(latest)?;
    compute_delta(current, previous.and_then(record_bmi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gymhealth_core::{BmiCategory, RecordId};

    fn record(weight: Option<f64>, height: Option<f64>) -> ProgressRecord {
        let mut r = ProgressRecord::new(RecordId::new(1), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        r.weight = weight;
        r.height = height;
        r
    }

    #[test]
    fn test_compute_bmi() {
        let bmi = compute_bmi(70.0, Some(175.0)).unwrap();
        assert!((bmi - 22.857).abs() < 0.01);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);

        assert_eq!(compute_bmi(70.0, None), None);
        assert_eq!(compute_bmi(70.0, Some(0.0)), None);
        assert_eq!(compute_bmi(70.0, Some(-170.0)), None);
    }

    #[test]
    fn test_record_bmi_requires_weight() {
        assert_eq!(record_bmi(&record(None, Some(175.0))), None);
        assert!(record_bmi(&record(Some(70.0), Some(175.0))).is_some());
    }

    #[test]
    fn test_bmi_delta_uses_each_records_height() {
        let latest = record(Some(80.0), Some(200.0));
        let previous = record(Some(80.0), Some(160.0));
        let delta = bmi_delta(&latest, Some(&previous)).unwrap();
        // 80 / 2.0^2 = 20.0, 80 / 1.6^2 = 31.25
        assert!((delta - (20.0 - 31.25)).abs() < 1e-9);

        let no_height = record(Some(80.0), None);
        assert_eq!(bmi_delta(&latest, Some(&no_height)), None);
        assert_eq!(bmi_delta(&latest, None), None);
    }
}
