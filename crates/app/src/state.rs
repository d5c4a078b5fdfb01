//! Screen state and fetch generations.

use serde::{Deserialize, Serialize};

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreenState<T> {
    /// Initial load in flight
    Loading,
    /// Last fetch failed
    Failed {
        /// User-facing message
        message: String,
    },
    /// Data available
    Loaded(T),
}

impl<T> ScreenState<T> {
    /// Loaded data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ScreenState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Whether the screen is in its loading state.
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }
}

/// Identifies one fetch issued by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

/// Issues fetch tokens and decides which completions may still be applied.
///
/// A completion is dropped when a newer fetch has already been applied, or
/// when the screen was left after the fetch was issued.
#[derive(Debug, Default)]
pub struct FetchTracker {
    issued: u64,
    applied: u64,
    floor: u64,
}

impl FetchTracker {
    /// Create a tracker with nothing issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new fetch.
    pub fn issue(&mut self) -> FetchToken {
        self.issued += 1;
        FetchToken(self.issued)
    }

    /// Record a completion; `false` means the result is stale and must be dropped.
    pub fn accept(&mut self, token: FetchToken) -> bool {
        if token.0 <= self.floor || token.0 < self.applied {
            return false;
        }
        self.applied = token.0;
        true
    }

    /// Drop every fetch issued so far (screen left).
    pub fn invalidate(&mut self) {
        self.floor = self.issued;
    }

    /// Whether any issued fetch has not completed or been invalidated.
    pub fn in_flight(&self) -> bool {
        self.issued > self.applied.max(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_completions_apply() {
        let mut tracker = FetchTracker::new();
        let a = tracker.issue();
        assert!(tracker.in_flight());
        assert!(tracker.accept(a));
        assert!(!tracker.in_flight());
        let b = tracker.issue();
        assert!(tracker.accept(b));
    }

    #[test]
    fn test_older_completion_after_newer_is_dropped() {
        let mut tracker = FetchTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(tracker.accept(second));
        assert!(!tracker.accept(first));
    }

    #[test]
    fn test_invalidate_drops_pending() {
        let mut tracker = FetchTracker::new();
        let pending = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.accept(pending));
        assert!(!tracker.in_flight());

        let fresh = tracker.issue();
        assert!(tracker.accept(fresh));
    }
}
