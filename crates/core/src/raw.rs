//! Wire shape of a progress record as returned by the API.

use serde::{Deserialize, Deserializer, Serialize};

/// A progress record exactly as the server sends it.
///
/// Field names follow the API (snake case); camelCase aliases are accepted.
/// Numbers may arrive as JSON numbers or numeric strings; anything else is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProgressRecord {
    /// Server id
    #[serde(default, deserialize_with = "lenient_u64")]
    pub id: Option<u64>,

    /// Measurement date as sent (`YYYY-MM-DD` or a timestamp)
    #[serde(default)]
    pub date: Option<String>,

    /// Body weight (kg)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,

    /// Body fat (%)
    #[serde(default, alias = "bodyFatPercentage", deserialize_with = "lenient_f64")]
    pub body_fat_percentage: Option<f64>,

    /// Muscle mass (%)
    #[serde(default, alias = "muscleMass", deserialize_with = "lenient_f64")]
    pub muscle_mass: Option<f64>,

    /// Chest (cm)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub chest: Option<f64>,

    /// Waist (cm)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub waist: Option<f64>,

    /// Hips (cm)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub hips: Option<f64>,

    /// Thighs (cm)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub thighs: Option<f64>,

    /// Arms (cm)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub arms: Option<f64>,

    /// Cardio endurance (min)
    #[serde(default, alias = "cardioEndurance", deserialize_with = "lenient_f64")]
    pub cardio_endurance: Option<f64>,

    /// Bench press 1RM (kg)
    #[serde(default, alias = "strengthBench", deserialize_with = "lenient_f64")]
    pub strength_bench: Option<f64>,

    /// Squat 1RM (kg)
    #[serde(default, alias = "strengthSquat", deserialize_with = "lenient_f64")]
    pub strength_squat: Option<f64>,

    /// Deadlift 1RM (kg)
    #[serde(default, alias = "strengthDeadlift", deserialize_with = "lenient_f64")]
    pub strength_deadlift: Option<f64>,

    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Member the record belongs to
    #[serde(default, alias = "memberUsername")]
    pub member_username: Option<String>,

    /// Trainer who recorded it
    #[serde(default, alias = "trainerUsername")]
    pub trainer_username: Option<String>,

    /// Workout session id, or the expanded session object
    #[serde(default, alias = "workoutSession", deserialize_with = "lenient_u64")]
    pub workout_session: Option<u64>,

    /// Server creation timestamp
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,

    /// Height (cm), used only for BMI
    #[serde(default, deserialize_with = "lenient_f64")]
    pub height: Option<f64>,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }).filter(|v| v.is_finite()))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        // Nested objects carry their id (e.g. an expanded workout session)
        serde_json::Value::Object(map) => map.get("id").and_then(|id| id.as_u64()),
        _ => None,
    }))
}
