//! Progress record model - one measurement snapshot of a member.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::metric::Metric;
use crate::Time;

/// A normalized progress record.
///
/// Records are immutable once fetched. Edits go through the remote API and
/// require a refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Unique identifier within the member's history
    pub id: RecordId,

    /// Day the measurement was taken
    pub date: NaiveDate,

    /// Body weight (kg)
    pub weight: Option<f64>,

    /// Body fat (%)
    pub body_fat_percentage: Option<f64>,

    /// Muscle mass (%)
    pub muscle_mass: Option<f64>,

    /// Body measurements
    pub measurements: BodyMeasurements,

    /// Fitness performance
    pub fitness: FitnessMetrics,

    /// Free-text notes
    pub notes: Option<String>,

    /// Member the record belongs to
    pub member_username: Option<String>,

    /// Trainer who recorded it
    pub trainer_username: Option<String>,

    /// Workout session the record was taken in
    pub workout_session: Option<u64>,

    /// Server creation time
    pub created_at: Option<Time>,

    /// Height (cm), only used to derive BMI
    pub height: Option<f64>,
}

/// Body measurements in centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Chest
    pub chest: Option<f64>,
    /// Waist
    pub waist: Option<f64>,
    /// Hips
    pub hips: Option<f64>,
    /// Thighs
    pub thighs: Option<f64>,
    /// Arms
    pub arms: Option<f64>,
}

/// Fitness performance metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessMetrics {
    /// Cardio endurance (minutes)
    pub cardio_endurance: Option<f64>,
    /// Bench press 1RM (kg)
    pub strength_bench: Option<f64>,
    /// Squat 1RM (kg)
    pub strength_squat: Option<f64>,
    /// Deadlift 1RM (kg)
    pub strength_deadlift: Option<f64>,
}

impl ProgressRecord {
    /// Create a record with only an id and a date.
    pub fn new(id: RecordId, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            weight: None,
            body_fat_percentage: None,
            muscle_mass: None,
            measurements: BodyMeasurements::default(),
            fitness: FitnessMetrics::default(),
            notes: None,
            member_username: None,
            trainer_username: None,
            workout_session: None,
            created_at: None,
            height: None,
        }
    }

    /// Raw value of a recorded metric. `None` means unknown, not zero.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => self.weight,
            Metric::BodyFat => self.body_fat_percentage,
            Metric::MuscleMass => self.muscle_mass,
            Metric::Chest => self.measurements.chest,
            Metric::Waist => self.measurements.waist,
            Metric::Hips => self.measurements.hips,
            Metric::Thighs => self.measurements.thighs,
            Metric::Arms => self.measurements.arms,
            Metric::CardioEndurance => self.fitness.cardio_endurance,
            Metric::StrengthBench => self.fitness.strength_bench,
            Metric::StrengthSquat => self.fitness.strength_squat,
            Metric::StrengthDeadlift => self.fitness.strength_deadlift,
        }
    }

    /// Non-empty notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}
