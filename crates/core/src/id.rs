//! Identifiers for GymHealth entities.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a progress record.
///
/// Opaque to this crate: it is only compared, displayed and echoed back
/// into request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw server id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().trim_start_matches('#').parse()?))
    }
}
