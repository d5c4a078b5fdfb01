//! Raw record normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use gymhealth_core::{
    BodyMeasurements, FitnessMetrics, ProgressRecord, RawProgressRecord, RecordId, Time,
};
use tracing::{debug, warn};

/// Normalize a list of raw API records.
///
/// Missing numbers stay `None`. Records without an id or a usable date are
/// skipped, since they can be neither addressed nor placed on a timeline.
/// Input order is preserved.
pub fn normalize<I>(raw_records: I) -> Vec<ProgressRecord>
where
    I: IntoIterator<Item = RawProgressRecord>,
{
    let records: Vec<_> = raw_records.into_iter().filter_map(normalize_record).collect();
    debug!("Normalized {} progress records", records.len());
    records
}

/// Normalize a single raw record.
pub fn normalize_record(raw: RawProgressRecord) -> Option<ProgressRecord> {
    let Some(id) = raw.id else {
        warn!("Skipping progress record without id");
        return None;
    };

    let created_at = raw.created_at.as_deref().and_then(parse_timestamp);
    let date = raw
        .date
        .as_deref()
        .and_then(parse_record_date)
        .or_else(|| raw.created_at.as_deref().and_then(parse_record_date));

    let Some(date) = date else {
        warn!("Skipping progress record {} without a valid date: {:?}", id, raw.date);
        return None;
    };

    Some(ProgressRecord {
        id: RecordId::new(id),
        date,
        weight: raw.weight,
        body_fat_percentage: raw.body_fat_percentage,
        muscle_mass: raw.muscle_mass,
        measurements: BodyMeasurements {
            chest: raw.chest,
            waist: raw.waist,
            hips: raw.hips,
            thighs: raw.thighs,
            arms: raw.arms,
        },
        fitness: FitnessMetrics {
            cardio_endurance: raw.cardio_endurance,
            strength_bench: raw.strength_bench,
            strength_squat: raw.strength_squat,
            strength_deadlift: raw.strength_deadlift,
        },
        notes: raw.notes,
        member_username: raw.member_username,
        trainer_username: raw.trainer_username,
        workout_session: raw.workout_session,
        created_at,
        height: raw.height,
    })
}

/// Parse a record date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the calendar date as written,
/// not shifted to UTC) and naive `YYYY-MM-DDTHH:MM:SS` timestamps.
pub fn parse_record_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    s.get(..10).and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

fn parse_timestamp(s: &str) -> Option<Time> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}
