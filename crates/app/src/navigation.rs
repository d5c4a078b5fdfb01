//! Navigation between the progress screens.

use gymhealth_core::{ProgressRecord, RecordId};
use tracing::debug;

/// A destination in the progress stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Tabbed overview (root)
    Overview,
    /// One record
    Detail {
        /// Record to show
        record_id: RecordId,
    },
    /// Add form (stub)
    AddProgress,
    /// Edit form (stub)
    EditProgress {
        /// Record being edited
        record: Box<ProgressRecord>,
    },
}

impl Route {
    /// Stable route name.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Overview => "Progress",
            Route::Detail { .. } => "ProgressDetail",
            Route::AddProgress => "AddProgress",
            Route::EditProgress { .. } => "EditProgress",
        }
    }

    /// Header title.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Overview => "Training progress",
            Route::Detail { .. } => "Progress details",
            Route::AddProgress => "Add progress",
            Route::EditProgress { .. } => "Edit progress",
        }
    }

    /// Whether the destination is a placeholder screen.
    pub fn is_stub(&self) -> bool {
        matches!(self, Route::AddProgress | Route::EditProgress { .. })
    }
}

/// Stack navigator rooted at [`Route::Overview`].
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Navigator showing the overview.
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Overview],
        }
    }

    /// Route on top of the stack.
    pub fn current(&self) -> &Route {
        // the root is never popped
        &self.stack[self.stack.len() - 1]
    }

    /// Push a destination.
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigate to {}", route.name());
        self.stack.push(route);
    }

    /// Pop the current destination. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(route) = self.stack.pop() {
            debug!("Leave {}", route.name());
        }
        true
    }

    /// Number of routes on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
