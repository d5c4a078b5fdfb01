//! Plain-text rendering of the screen views.

use gymhealth_app::{DetailView, OverviewView, Route, EMPTY_MESSAGE};
use gymhealth_core::{Metric, ProgressRecord};
use gymhealth_progress::{
    format_delta, MetricChange, OverviewSummary, Trend, TrendSeries, NO_DATA_LABEL,
};

/// Render the overview for the selected tab.
///
/// `history_limit` caps the rows of the history tab (0 = all).
pub fn render_overview(view: &OverviewView, history_limit: usize) -> String {
    let mut lines = vec![Route::Overview.title().to_string()];

    match view {
        OverviewView::Loading => lines.push("Loading...".to_string()),
        OverviewView::Failed { message } => {
            lines.push(format!("Error: {}", message));
            lines.push("Run the command again to retry.".to_string());
        }
        OverviewView::Empty => {
            lines.push(EMPTY_MESSAGE.to_string());
            lines.push(format!("Add your first record from \"{}\".", Route::AddProgress.title()));
        }
        OverviewView::Overview { summary, chart } => {
            push_header(&mut lines, summary);
            lines.push("Body composition".to_string());
            push_changes(&mut lines, &summary.composition);
            if let Some(bmi) = &summary.bmi {
                lines.push(format!(
                    "  BMI: {:.1} ({}){}",
                    bmi.value,
                    bmi.category.label(),
                    change_suffix(bmi.delta, bmi.trend)
                ));
            }
            push_chart(&mut lines, chart);
        }
        OverviewView::Body { summary, chart } => {
            push_header(&mut lines, summary);
            lines.push("Body measurements".to_string());
            push_changes(&mut lines, &summary.measurements);
            push_chart(&mut lines, chart);
        }
        OverviewView::Fitness { summary, chart } => {
            push_header(&mut lines, summary);
            lines.push("Fitness".to_string());
            push_changes(&mut lines, &summary.fitness);
            push_chart(&mut lines, chart);
        }
        OverviewView::History { records } => {
            let shown = if history_limit == 0 {
                records.len()
            } else {
                history_limit.min(records.len())
            };
            lines.push(format!("History ({} records)", records.len()));
            lines.extend(records.iter().take(shown).map(history_row));
            if shown < records.len() {
                lines.push(format!("  ... {} more", records.len() - shown));
            }
        }
    }

    lines.join("\n")
}

/// Render the detail screen.
pub fn render_detail(view: &DetailView) -> String {
    let mut lines = vec!["Progress details".to_string()];

    match view {
        DetailView::Loading => lines.push("Loading...".to_string()),
        DetailView::Failed { message } => lines.push(format!("Error: {}", message)),
        DetailView::Loaded {
            record,
            weight_chart,
            composition_chart,
            delete_error,
        } => {
            lines.push(format!("Record #{} ({})", record.id, record.date.format("%Y-%m-%d")));
            if let Some(trainer) = &record.trainer_username {
                lines.push(format!("  Trainer: {}", trainer));
            }
            lines.push("Body composition".to_string());
            push_values(&mut lines, record, &Metric::COMPOSITION);
            lines.push("Body measurements".to_string());
            push_values(&mut lines, record, &Metric::MEASUREMENTS);
            lines.push("Fitness".to_string());
            push_values(&mut lines, record, &Metric::FITNESS);
            if let Some(notes) = record.notes() {
                lines.push(format!("Notes: {}", notes));
            }
            if let Some(chart) = weight_chart {
                lines.push("Weight history".to_string());
                push_chart(&mut lines, chart);
            }
            if let Some(chart) = composition_chart {
                lines.push("Composition history".to_string());
                push_chart(&mut lines, chart);
            }
            if let Some(error) = delete_error {
                lines.push(format!("Error: {}", error));
            }
        }
    }

    lines.join("\n")
}

/// Render a placeholder route.
pub fn render_stub(route: &Route) -> String {
    let mut lines = vec![route.title().to_string()];
    if let Route::EditProgress { record } = route {
        lines.push(format!("Record #{} ({})", record.id, record.date.format("%Y-%m-%d")));
    }
    lines.push("This screen is not available yet.".to_string());
    lines.join("\n")
}

fn push_header(lines: &mut Vec<String>, summary: &OverviewSummary) {
    let mut header = format!("Latest: {}", summary.latest.date.format("%Y-%m-%d"));
    if let Some(previous) = &summary.previous {
        header.push_str(&format!(" (previous: {})", previous.date.format("%Y-%m-%d")));
    }
    lines.push(header);
}

fn push_changes(lines: &mut Vec<String>, changes: &[MetricChange]) {
    for change in changes {
        lines.push(format!(
            "  {}: {}{}",
            change.metric.label(),
            format_value(change.value, change.metric),
            change_suffix(change.delta, change.trend)
        ));
    }
}

fn push_values(lines: &mut Vec<String>, record: &ProgressRecord, metrics: &[Metric]) {
    for &metric in metrics {
        lines.push(format!("  {}: {}", metric.label(), format_value(record.value(metric), metric)));
    }
}

fn push_chart(lines: &mut Vec<String>, chart: &TrendSeries) {
    if chart.is_placeholder() {
        lines.push(format!("  ({} in range)", NO_DATA_LABEL.to_lowercase()));
        return;
    }
    lines.push(format!("  {:<18}{}", "", chart.labels.join("  ")));
    for dataset in &chart.datasets {
        let values: Vec<String> = dataset.data.iter().map(|v| format!("{:.1}", v)).collect();
        lines.push(format!("  {:<18}{}", dataset.metric.label(), values.join("  ")));
    }
}

fn history_row(record: &ProgressRecord) -> String {
    let mut row = format!(
        "  #{:<5} {}  weight {}  fat {}  muscle {}",
        record.id.to_string(),
        record.date.format("%Y-%m-%d"),
        format_value(record.weight, Metric::Weight),
        format_value(record.body_fat_percentage, Metric::BodyFat),
        format_value(record.muscle_mass, Metric::MuscleMass),
    );
    if let Some(notes) = record.notes() {
        row.push_str(&format!("  \"{}\"", notes));
    }
    row
}

fn format_value(value: Option<f64>, metric: Metric) -> String {
    match value {
        Some(v) if metric.unit() == "%" => format!("{:.1}%", v),
        Some(v) => format!("{:.1} {}", v, metric.unit()),
        None => "-".to_string(),
    }
}

fn change_suffix(delta: Option<f64>, trend: Option<Trend>) -> String {
    let formatted = format_delta(delta);
    if formatted.is_empty() {
        return String::new();
    }
    match trend {
        Some(Trend::Improved) => format!(" ({}, improved)", formatted),
        Some(Trend::Worsened) => format!(" ({}, worsened)", formatted),
        Some(Trend::Unchanged) | None => format!(" ({})", formatted),
    }
}
