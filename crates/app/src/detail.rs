//! Detail screen: one record, its history charts, edit and delete.

use std::sync::Arc;

use gymhealth_api::ProgressApi;
use gymhealth_core::{Metric, ProgressRecord, RecordId};
use gymhealth_progress::{
    history_series, normalize, normalize_record, sort_ascending_by_date, TrendSeries,
    HISTORY_CHART_POINTS,
};
use tracing::{error, info, warn};

use crate::navigation::{Navigator, Route};
use crate::state::{FetchTracker, ScreenState};
use crate::{DELETE_ERROR_MESSAGE, DETAIL_ERROR_MESSAGE};

/// What the detail screen renders.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Spinner
    Loading,
    /// Error with a way back
    Failed {
        /// User-facing message
        message: String,
    },
    /// The record
    Loaded {
        /// Record shown
        record: Box<ProgressRecord>,
        /// Weight over the last points of history (needs two records)
        weight_chart: Option<TrendSeries>,
        /// Body fat and muscle mass over the same window
        composition_chart: Option<TrendSeries>,
        /// Set after a failed delete
        delete_error: Option<String>,
    },
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted; navigated back
    Deleted,
    /// Failed; still on the detail screen
    Failed,
}

/// Detail screen controller.
pub struct DetailScreen {
    api: Arc<dyn ProgressApi>,
    record_id: RecordId,
    state: ScreenState<ProgressRecord>,
    history: Vec<ProgressRecord>,
    delete_error: Option<String>,
    fetches: FetchTracker,
}

impl DetailScreen {
    /// Create the screen for `record_id` in its loading state.
    pub fn new(api: Arc<dyn ProgressApi>, record_id: RecordId) -> Self {
        Self {
            api,
            record_id,
            state: ScreenState::Loading,
            history: Vec::new(),
            delete_error: None,
            fetches: FetchTracker::new(),
        }
    }

    /// Record this screen shows.
    pub fn record_id(&self) -> RecordId {
        self.record_id
    }

    /// Raw screen state.
    pub fn state(&self) -> &ScreenState<ProgressRecord> {
        &self.state
    }

    /// Member history, oldest first. Empty until loaded.
    pub fn history(&self) -> &[ProgressRecord] {
        &self.history
    }

    /// Load the record, then the history used for the charts.
    ///
    /// A failed history fetch is logged and leaves the charts out; the
    /// record itself still shows.
    pub async fn load(&mut self) {
        let token = self.fetches.issue();
        self.state = ScreenState::Loading;
        self.history.clear();
        self.delete_error = None;

        let result = self.api.progress(self.record_id).await;
        if !self.fetches.accept(token) {
            info!("Dropping stale fetch of record {}", self.record_id);
            return;
        }

        let record = match result {
            Ok(raw) => normalize_record(raw),
            Err(e) => {
                error!("Error fetching progress record {} ({:?}): {}", self.record_id, e.kind(), e);
                None
            }
        };

        let Some(record) = record else {
            self.state = ScreenState::Failed {
                message: DETAIL_ERROR_MESSAGE.to_string(),
            };
            return;
        };
        self.state = ScreenState::Loaded(record);

        let token = self.fetches.issue();
        let history = self.api.my_progress().await;
        if !self.fetches.accept(token) {
            return;
        }
        match history {
            Ok(raw) => self.history = sort_ascending_by_date(normalize(raw)),
            Err(e) => warn!("Error fetching progress history ({:?}): {}", e.kind(), e),
        }
    }

    /// Render the screen.
    pub fn view(&self) -> DetailView {
        match &self.state {
            ScreenState::Loading => DetailView::Loading,
            ScreenState::Failed { message } => DetailView::Failed {
                message: message.clone(),
            },
            ScreenState::Loaded(record) => DetailView::Loaded {
                record: Box::new(record.clone()),
                weight_chart: history_series(&self.history, HISTORY_CHART_POINTS, &[Metric::Weight]),
                composition_chart: history_series(
                    &self.history,
                    HISTORY_CHART_POINTS,
                    &[Metric::BodyFat, Metric::MuscleMass],
                ),
                delete_error: self.delete_error.clone(),
            },
        }
    }

    /// Open the edit form for the loaded record. `false` when nothing is loaded.
    pub fn edit(&self, nav: &mut Navigator) -> bool {
        let Some(record) = self.state.data() else {
            return false;
        };
        nav.navigate(Route::EditProgress {
            record: Box::new(record.clone()),
        });
        true
    }

    /// Delete the record.
    ///
    /// On success the in-memory copy is dropped and the navigator goes back.
    /// On failure the screen stays put and shows the delete error.
    pub async fn delete(&mut self, nav: &mut Navigator) -> DeleteOutcome {
        match self.api.delete_progress(self.record_id).await {
            Ok(()) => {
                info!("Deleted progress record {}", self.record_id);
                self.fetches.invalidate();
                self.state = ScreenState::Loading;
                self.history.clear();
                self.delete_error = None;
                nav.go_back();
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Error deleting progress record {} ({:?}): {}", self.record_id, e.kind(), e);
                self.delete_error = Some(DELETE_ERROR_MESSAGE.to_string());
                DeleteOutcome::Failed
            }
        }
    }

    /// Leave the screen; late completions are dropped.
    pub fn back(&mut self, nav: &mut Navigator) {
        self.fetches.invalidate();
        nav.go_back();
    }
}
