//! GymHealth core data models.
//!
//! This crate defines the progress record model shared by the aggregator,
//! the API client and the screens.

#![warn(missing_docs)]

// Identities
mod id;

// Records
mod record;
mod raw;

// Metrics and classification
mod metric;

// Re-exports
pub use id::RecordId;

pub use record::{ProgressRecord, BodyMeasurements, FitnessMetrics};
pub use raw::RawProgressRecord;
pub use metric::{Metric, Direction, TimeRange, BmiCategory};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
