//! Metrics, time ranges and BMI classification.

use serde::{Deserialize, Serialize};

/// A metric recorded on a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Body weight (kg)
    Weight,
    /// Body fat (%)
    BodyFat,
    /// Muscle mass (%)
    MuscleMass,
    /// Chest girth (cm)
    Chest,
    /// Waist girth (cm)
    Waist,
    /// Hip girth (cm)
    Hips,
    /// Thigh girth (cm)
    Thighs,
    /// Arm girth (cm)
    Arms,
    /// Cardio endurance (min)
    CardioEndurance,
    /// Bench press 1RM (kg)
    StrengthBench,
    /// Squat 1RM (kg)
    StrengthSquat,
    /// Deadlift 1RM (kg)
    StrengthDeadlift,
}

/// Which way a change counts as progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// A decrease is favorable
    Lower,
    /// An increase is favorable
    Higher,
}

impl Metric {
    /// Body composition metrics shown on the overview.
    pub const COMPOSITION: [Metric; 3] = [Metric::Weight, Metric::BodyFat, Metric::MuscleMass];

    /// Body measurements, in display order.
    pub const MEASUREMENTS: [Metric; 5] = [
        Metric::Chest,
        Metric::Waist,
        Metric::Hips,
        Metric::Thighs,
        Metric::Arms,
    ];

    /// Fitness metrics, in display order.
    pub const FITNESS: [Metric; 4] = [
        Metric::CardioEndurance,
        Metric::StrengthBench,
        Metric::StrengthSquat,
        Metric::StrengthDeadlift,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Weight => "Weight",
            Metric::BodyFat => "Body fat",
            Metric::MuscleMass => "Muscle mass",
            Metric::Chest => "Chest",
            Metric::Waist => "Waist",
            Metric::Hips => "Hips",
            Metric::Thighs => "Thighs",
            Metric::Arms => "Arms",
            Metric::CardioEndurance => "Cardio endurance",
            Metric::StrengthBench => "Bench press",
            Metric::StrengthSquat => "Squat",
            Metric::StrengthDeadlift => "Deadlift",
        }
    }

    /// Display unit.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Weight | Metric::StrengthBench | Metric::StrengthSquat | Metric::StrengthDeadlift => "kg",
            Metric::BodyFat | Metric::MuscleMass => "%",
            Metric::Chest | Metric::Waist | Metric::Hips | Metric::Thighs | Metric::Arms => "cm",
            Metric::CardioEndurance => "min",
        }
    }

    /// Which direction of change is progress for this metric.
    ///
    /// Losing weight, fat and waist/hip/thigh girth is favorable; gaining
    /// muscle, chest and arm girth and strength is favorable.
    pub fn favorable_direction(self) -> Direction {
        match self {
            Metric::Weight | Metric::BodyFat | Metric::Waist | Metric::Hips | Metric::Thighs => {
                Direction::Lower
            }
            Metric::MuscleMass
            | Metric::Chest
            | Metric::Arms
            | Metric::CardioEndurance
            | Metric::StrengthBench
            | Metric::StrengthSquat
            | Metric::StrengthDeadlift => Direction::Higher,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Time window used to filter history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Last 365 days
    Year,
    /// Everything
    #[default]
    All,
}

impl TimeRange {
    /// Window length in days, `None` for [`TimeRange::All`].
    pub fn days(self) -> Option<i64> {
        match self {
            TimeRange::Week => Some(7),
            TimeRange::Month => Some(30),
            TimeRange::Year => Some(365),
            TimeRange::All => None,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::All => "all",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" | "w" => Ok(TimeRange::Week),
            "month" | "m" => Ok(TimeRange::Month),
            "year" | "y" => Ok(TimeRange::Year),
            "all" => Ok(TimeRange::All),
            other => Err(format!("unknown time range: {other}")),
        }
    }
}

/// BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// BMI is favorable when it goes down.
    pub const FAVORABLE: Direction = Direction::Lower;

    /// Classify a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_thresholds() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_time_range_parse() {
        assert_eq!("Week".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("all".parse::<TimeRange>().unwrap(), TimeRange::All);
        assert!("decade".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::Year.days(), Some(365));
        assert_eq!(TimeRange::All.days(), None);
    }

    #[test]
    fn test_favorable_direction() {
        assert_eq!(Metric::Weight.favorable_direction(), Direction::Lower);
        assert_eq!(Metric::BodyFat.favorable_direction(), Direction::Lower);
        assert_eq!(Metric::MuscleMass.favorable_direction(), Direction::Higher);
        assert!(Metric::FITNESS.iter().all(|m| m.favorable_direction() == Direction::Higher));
    }
}
