//! Overview screen: tabs, time filter and the record history.

use std::sync::Arc;

use chrono::NaiveDate;
use gymhealth_api::{ApiError, ProgressApi};
use gymhealth_core::{Metric, ProgressRecord, RawProgressRecord, RecordId, TimeRange};
use gymhealth_progress::{
    build_trend_series, filter_by_time_range, normalize, sort_descending_by_date, OverviewSummary,
    TrendSeries, BREAKDOWN_CHART_POINTS, OVERVIEW_CHART_POINTS,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::navigation::{Navigator, Route};
use crate::state::{FetchToken, FetchTracker, ScreenState};
use crate::LOAD_ERROR_MESSAGE;

/// Overview tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverviewTab {
    /// Composition summary and chart
    #[default]
    Overview,
    /// Body measurements
    Body,
    /// Fitness performance
    Fitness,
    /// Every record, latest first
    History,
}

impl std::str::FromStr for OverviewTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(OverviewTab::Overview),
            "body" => Ok(OverviewTab::Body),
            "fitness" => Ok(OverviewTab::Fitness),
            "history" => Ok(OverviewTab::History),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// What the overview renders for the current tab.
#[derive(Debug, Clone, PartialEq)]
pub enum OverviewView {
    /// Spinner (initial load only, not on refresh)
    Loading,
    /// Error with retry
    Failed {
        /// User-facing message
        message: String,
    },
    /// No records yet, offers the add action
    Empty,
    /// Composition summary with chart
    Overview {
        /// Latest versus previous
        summary: Box<OverviewSummary>,
        /// Weight, body fat and muscle mass
        chart: TrendSeries,
    },
    /// Measurements with chart
    Body {
        /// Latest versus previous
        summary: Box<OverviewSummary>,
        /// Five measurements
        chart: TrendSeries,
    },
    /// Fitness with chart
    Fitness {
        /// Latest versus previous
        summary: Box<OverviewSummary>,
        /// Four fitness metrics
        chart: TrendSeries,
    },
    /// Record list
    History {
        /// All records, latest first
        records: Vec<ProgressRecord>,
    },
}

/// Overview screen controller.
pub struct OverviewScreen {
    api: Arc<dyn ProgressApi>,
    state: ScreenState<Vec<ProgressRecord>>,
    refreshing: bool,
    tab: OverviewTab,
    range: TimeRange,
    fetches: FetchTracker,
}

impl OverviewScreen {
    /// Create the screen in its loading state.
    pub fn new(api: Arc<dyn ProgressApi>) -> Self {
        Self {
            api,
            state: ScreenState::Loading,
            refreshing: false,
            tab: OverviewTab::default(),
            range: TimeRange::default(),
            fetches: FetchTracker::new(),
        }
    }

    /// Initial load.
    pub async fn load(&mut self) {
        let token = self.begin_fetch(false);
        let result = self.api.my_progress().await;
        self.finish_fetch(token, result);
    }

    /// Pull-to-refresh: keeps current data on screen while fetching.
    pub async fn refresh(&mut self) {
        let token = self.begin_fetch(true);
        let result = self.api.my_progress().await;
        self.finish_fetch(token, result);
    }

    /// Retry after a failure; reruns the full fetch.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Start a fetch and return its token.
    ///
    /// The result must be handed to [`OverviewScreen::finish_fetch`].
    pub fn begin_fetch(&mut self, refresh: bool) -> FetchToken {
        if refresh {
            self.refreshing = true;
        } else {
            self.state = ScreenState::Loading;
        }
        self.fetches.issue()
    }

    /// Apply a fetch result unless a newer one already landed.
    pub fn finish_fetch(
        &mut self,
        token: FetchToken,
        result: Result<Vec<RawProgressRecord>, ApiError>,
    ) {
        if !self.fetches.accept(token) {
            info!("Dropping stale progress fetch {:?}", token);
            return;
        }
        self.refreshing = self.fetches.in_flight();

        self.state = match result {
            Ok(raw) => {
                let records = sort_descending_by_date(normalize(raw));
                info!("Loaded {} progress records", records.len());
                ScreenState::Loaded(records)
            }
            Err(e) => {
                error!("Error fetching training progress ({:?}): {}", e.kind(), e);
                ScreenState::Failed {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                }
            }
        };
    }

    /// Stop applying in-flight fetches (screen left).
    pub fn leave(&mut self) {
        self.fetches.invalidate();
        self.refreshing = false;
    }

    /// Switch tab.
    pub fn select_tab(&mut self, tab: OverviewTab) {
        self.tab = tab;
    }

    /// Switch time filter.
    pub fn select_range(&mut self, range: TimeRange) {
        self.range = range;
    }

    /// Current tab.
    pub fn tab(&self) -> OverviewTab {
        self.tab
    }

    /// Current time filter.
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Whether a refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Raw screen state.
    pub fn state(&self) -> &ScreenState<Vec<ProgressRecord>> {
        &self.state
    }

    /// Records inside the selected time range, latest first.
    pub fn filtered(&self, today: NaiveDate) -> Vec<ProgressRecord> {
        self.state
            .data()
            .map(|records| filter_by_time_range(records, self.range, today))
            .unwrap_or_default()
    }

    /// Render the current tab.
    ///
    /// Latest/previous comparisons use the full history; charts use the
    /// time-filtered records.
    pub fn view(&self, today: NaiveDate) -> OverviewView {
        let records = match &self.state {
            ScreenState::Loading => return OverviewView::Loading,
            ScreenState::Failed { message } => {
                return OverviewView::Failed {
                    message: message.clone(),
                }
            }
            ScreenState::Loaded(records) => records,
        };

        match self.tab {
            OverviewTab::History if records.is_empty() => OverviewView::Empty,
            OverviewTab::History => OverviewView::History {
                records: records.clone(),
            },
            OverviewTab::Overview => self.tab_view(records, today, OVERVIEW_CHART_POINTS, &Metric::COMPOSITION, |summary, chart| {
                OverviewView::Overview { summary, chart }
            }),
            OverviewTab::Body => self.tab_view(records, today, BREAKDOWN_CHART_POINTS, &Metric::MEASUREMENTS, |summary, chart| {
                OverviewView::Body { summary, chart }
            }),
            OverviewTab::Fitness => self.tab_view(records, today, BREAKDOWN_CHART_POINTS, &Metric::FITNESS, |summary, chart| {
                OverviewView::Fitness { summary, chart }
            }),
        }
    }

    fn tab_view(
        &self,
        records: &[ProgressRecord],
        today: NaiveDate,
        points: usize,
        fields: &[Metric],
        wrap: impl FnOnce(Box<OverviewSummary>, TrendSeries) -> OverviewView,
    ) -> OverviewView {
        let Some(summary) = OverviewSummary::build(records) else {
            return OverviewView::Empty;
        };
        let filtered = filter_by_time_range(records, self.range, today);
        wrap(Box::new(summary), build_trend_series(&filtered, points, fields))
    }

    /// Open a record from the history list.
    pub fn open_record(&self, record_id: RecordId, nav: &mut Navigator) {
        nav.navigate(Route::Detail { record_id });
    }

    /// Open the add form.
    pub fn add_progress(&self, nav: &mut Navigator) {
        nav.navigate(Route::AddProgress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use gymhealth_progress::format_delta;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
    }

    fn two_records() -> Vec<RawProgressRecord> {
        MockApi::raw(&[
            r#"{"id": 1, "date": "2024-01-01", "weight": 80, "body_fat_percentage": 22}"#,
            r#"{"id": 2, "date": "2024-02-01", "weight": 78, "body_fat_percentage": 21}"#,
        ])
    }

    #[tokio::test]
    async fn test_load_sorts_latest_first() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(two_records())));
        assert!(screen.state().is_loading());
        assert_eq!(screen.view(today()), OverviewView::Loading);

        screen.load().await;
        let records = screen.state().data().unwrap();
        assert_eq!(records[0].id, RecordId::new(2));
        assert_eq!(records[1].id, RecordId::new(1));
    }

    #[tokio::test]
    async fn test_overview_tab_shows_weight_delta() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(two_records())));
        screen.load().await;

        let OverviewView::Overview { summary, chart } = screen.view(today()) else {
            panic!("expected overview");
        };
        let weight = summary.change(Metric::Weight).unwrap();
        assert_eq!(format_delta(weight.delta), "-2.0");
        assert_eq!(chart.labels, vec!["1/1".to_string(), "1/2".to_string()]);
    }

    #[tokio::test]
    async fn test_range_filters_chart_but_not_summary() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(two_records())));
        screen.load().await;
        screen.select_range(TimeRange::Week);

        let OverviewView::Overview { summary, chart } = screen.view(today()) else {
            panic!("expected overview");
        };
        assert_eq!(chart.len(), 1);
        assert!(summary.previous.is_some());
        assert_eq!(screen.filtered(today()).len(), 1);
    }

    /// Seven January records, five days apart. Record 5 has no waist and
    /// only even ids have a bench press.
    fn january() -> Vec<RawProgressRecord> {
        let json: Vec<String> = (1..=7u32)
            .map(|id| {
                let waist = if id == 5 { "null".to_string() } else { (90 - id).to_string() };
                let bench = if id % 2 == 0 { (60 + id).to_string() } else { "null".to_string() };
                format!(
                    r#"{{"id": {id}, "date": "2024-01-{:02}", "waist": {waist}, "strength_bench": {bench}}}"#,
                    1 + (id - 1) * 5
                )
            })
            .collect();
        let refs: Vec<&str> = json.iter().map(String::as_str).collect();
        MockApi::raw(&refs)
    }

    #[tokio::test]
    async fn test_body_tab_caps_chart_at_five_points() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(january())));
        screen.load().await;
        screen.select_tab(OverviewTab::Body);

        let OverviewView::Body { summary, chart } = screen.view(today()) else {
            panic!("expected body tab");
        };
        assert_eq!(chart.len(), BREAKDOWN_CHART_POINTS);
        assert_eq!(chart.labels, vec!["11/1", "16/1", "21/1", "26/1", "31/1"]);
        assert_eq!(chart.dataset(Metric::Waist).unwrap().data, vec![87.0, 86.0, 0.0, 84.0, 83.0]);
        assert_eq!(chart.datasets.len(), Metric::MEASUREMENTS.len());

        let waist = summary.change(Metric::Waist).unwrap();
        assert_eq!(waist.value, Some(83.0));
        assert_eq!(format_delta(waist.delta), "-1.0");
    }

    #[tokio::test]
    async fn test_fitness_tab_draws_missing_as_zero() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(january())));
        screen.load().await;
        screen.select_tab(OverviewTab::Fitness);

        let OverviewView::Fitness { summary, chart } = screen.view(today()) else {
            panic!("expected fitness tab");
        };
        assert_eq!(chart.len(), BREAKDOWN_CHART_POINTS);
        assert_eq!(chart.dataset(Metric::StrengthBench).unwrap().data, vec![0.0, 64.0, 0.0, 66.0, 0.0]);
        assert_eq!(chart.dataset(Metric::CardioEndurance).unwrap().data, vec![0.0; 5]);

        // latest has no bench press, previous had 66
        let bench = summary.change(Metric::StrengthBench).unwrap();
        assert_eq!(bench.value, Some(0.0));
        assert_eq!(bench.delta, Some(-66.0));
    }

    #[tokio::test]
    async fn test_breakdown_tabs_chart_only_the_selected_range() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(january())));
        screen.load().await;
        screen.select_range(TimeRange::Week);

        screen.select_tab(OverviewTab::Body);
        let OverviewView::Body { summary, chart } = screen.view(today()) else {
            panic!("expected body tab");
        };
        assert_eq!(chart.labels, vec!["31/1"]);
        assert_eq!(summary.previous.as_ref().map(|r| r.id), Some(RecordId::new(6)));

        screen.select_tab(OverviewTab::Fitness);
        let OverviewView::Fitness { chart, .. } = screen.view(today()) else {
            panic!("expected fitness tab");
        };
        assert_eq!(chart.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let api = Arc::new(MockApi::failing());
        let mut screen = OverviewScreen::new(api.clone());
        screen.load().await;
        assert_eq!(
            screen.view(today()),
            OverviewView::Failed { message: LOAD_ERROR_MESSAGE.to_string() }
        );

        api.set_records(two_records());
        screen.retry().await;
        assert!(matches!(screen.view(today()), OverviewView::Overview { .. }));
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(vec![])));
        screen.load().await;
        assert_eq!(screen.view(today()), OverviewView::Empty);

        screen.select_tab(OverviewTab::History);
        assert_eq!(screen.view(today()), OverviewView::Empty);

        let mut nav = Navigator::new();
        screen.add_progress(&mut nav);
        assert_eq!(nav.current(), &Route::AddProgress);
    }

    #[tokio::test]
    async fn test_history_tab_and_open_record() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(two_records())));
        screen.load().await;
        screen.select_tab(OverviewTab::History);

        let OverviewView::History { records } = screen.view(today()) else {
            panic!("expected history");
        };
        assert_eq!(records.len(), 2);

        let mut nav = Navigator::new();
        screen.open_record(records[0].id, &mut nav);
        assert_eq!(nav.current(), &Route::Detail { record_id: RecordId::new(2) });
    }

    #[tokio::test]
    async fn test_refresh_keeps_data_and_stale_results_drop() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(two_records())));
        screen.load().await;

        let older = screen.begin_fetch(true);
        let newer = screen.begin_fetch(true);
        assert!(screen.is_refreshing());
        assert!(screen.state().data().is_some());

        screen.finish_fetch(newer, Ok(MockApi::raw(&[r#"{"id": 9, "date": "2024-02-04"}"#])));
        assert!(!screen.is_refreshing());
        screen.finish_fetch(older, Err(ApiError::MissingCredential));

        let records = screen.state().data().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, RecordId::new(9));
    }

    #[tokio::test]
    async fn test_leave_drops_in_flight_fetch() {
        let mut screen = OverviewScreen::new(Arc::new(MockApi::with_records(two_records())));
        let token = screen.begin_fetch(false);
        screen.leave();
        screen.finish_fetch(token, Ok(two_records()));
        assert!(screen.state().is_loading());
    }
}
