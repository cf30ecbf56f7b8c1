//! Askama templates and view models for the board.
//!
//! The render is stateless: a `BoardTemplate` is built fresh from the
//! widget on every request, so the HTML always reflects the latest
//! consumed fetch result.

use askama::Template;

use crate::board::DisplayRow;
use crate::widget::DepartureBoardWidget;

/// Page shell around the board fragment.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub station_name: String,
    /// Page auto-refresh period in seconds
    pub refresh_secs: u64,
    /// Pre-rendered board fragment
    pub board: String,
}

/// The board itself, rendered as a table fragment.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub configured: bool,
    /// Shown instead of the board when unconfigured
    pub config_message: String,
    pub loaded: bool,
    pub station_name: String,
    pub show_platform: bool,
    pub show_origin: bool,
    pub show_actual: bool,
    pub rows: Vec<RowView>,
    /// Shown when there are no rows
    pub message: String,
    pub updated_at: String,
}

/// One table row, display-ready.
#[derive(Debug, Clone)]
pub struct RowView {
    /// Platform, dash-substituted when the station published none
    pub platform: String,
    pub destination: String,
    pub origin: String,
    pub planned: String,
    pub actual: Option<String>,
    /// "on-time", "late", or "" when there is no live time
    pub status_class: &'static str,
    /// Row opacity from the fade effect, preformatted
    pub opacity: String,
}

impl BoardTemplate {
    /// Build the view model from the widget's current state.
    pub fn from_widget(widget: &DepartureBoardWidget) -> Self {
        let config = widget.config();
        let state = widget.state();

        let len = state.rows.len();
        let rows = state
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let opacity = row_opacity(index, len, config.fade, config.fade_point);
                RowView::new(row, opacity)
            })
            .collect();

        let config_message = widget
            .config_error()
            .map(|e| format!("Please configure the departure board: {e}."))
            .unwrap_or_default();

        Self {
            configured: widget.config_error().is_none(),
            config_message,
            loaded: state.loaded,
            station_name: state.station_name.clone(),
            show_platform: config.show_platform,
            show_origin: config.show_origin,
            show_actual: config.show_actual_departure,
            rows,
            message: state.message.clone().unwrap_or_default(),
            updated_at: state.updated_at.format("%H:%M:%S").to_string(),
        }
    }
}

impl RowView {
    fn new(row: &DisplayRow, opacity: f64) -> Self {
        Self {
            platform: row.platform.clone().unwrap_or_else(|| "-".to_string()),
            destination: row.destination.clone(),
            origin: row.origin.clone(),
            planned: row.planned_departure.clone(),
            status_class: status_class(row.actual_departure.as_deref()),
            actual: row.actual_departure.clone(),
            opacity: format!("{opacity:.2}"),
        }
    }
}

/// Status class for the live departure cell.
///
/// The upstream sends the literal string "On time" for punctual services;
/// anything else it sends there is a delay estimate or disruption text.
fn status_class(actual: Option<&str>) -> &'static str {
    match actual {
        None => "",
        Some(etd) if etd.eq_ignore_ascii_case("on time") => "on-time",
        Some(_) => "late",
    }
}

/// Opacity for the fade effect.
///
/// Rows before `len * fade_point` stay fully opaque; from there opacity
/// falls linearly towards 0 across the remaining rows. A fade point at or
/// past 1 disables the effect, a negative one clamps to 0.
fn row_opacity(index: usize, len: usize, fade: bool, fade_point: f64) -> f64 {
    if !fade || fade_point >= 1.0 || len == 0 {
        return 1.0;
    }

    let start = len as f64 * fade_point.max(0.0);
    let steps = len as f64 - start;
    let index = index as f64;

    if index < start {
        return 1.0;
    }
    (1.0 - (index - start) / steps).max(0.0)
}
