//! Progress screens.
//!
//! Headless controllers for the overview and detail screens plus the
//! navigator that links them. Each controller owns its state and replaces it
//! wholesale when a fetch completes.

#![warn(missing_docs)]

pub mod state;
pub mod navigation;
pub mod overview;
pub mod detail;

pub use state::{ScreenState, FetchToken, FetchTracker};
pub use navigation::{Navigator, Route};
pub use overview::{OverviewScreen, OverviewTab, OverviewView};
pub use detail::{DetailScreen, DetailView, DeleteOutcome};

/// Shown when the overview cannot load.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load progress data";

/// Shown when the detail screen cannot load.
pub const DETAIL_ERROR_MESSAGE: &str = "Unable to load record details";

/// Shown when deleting a record fails.
pub const DELETE_ERROR_MESSAGE: &str = "Unable to delete record";

/// Shown when the member has no records yet.
pub const EMPTY_MESSAGE: &str = "No progress data yet";

#[cfg(test)]
mod testing;
