//! Board state and the payload transform.
//!
//! `build_board` shapes a raw Huxley payload into the display model: it
//! truncates to the configured number of rows, picks the effective
//! destination, and degrades absent payloads or empty service lists to
//! message states. The state is rebuilt from scratch on every fetch
//! result, never patched.

use chrono::{DateTime, Local};

use crate::huxley::{StationBoard, TrainService};

/// Message shown when the fetch produced no payload at all.
pub const MSG_NO_DATA: &str = "No data returned";

/// Message shown when the payload lists no upcoming services.
pub const MSG_NO_DEPARTURES: &str = "No departure info found";

/// Station name used when the payload does not carry one.
const DEFAULT_STATION_NAME: &str = "Departures";

/// Placeholder for nested fields the payload left out.
const PLACEHOLDER: &str = "-";

/// One rendered line of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Timetabled departure time
    pub planned_departure: String,
    /// Live departure time, when the API published one
    pub actual_departure: Option<String>,
    /// Where the service started
    pub origin: String,
    /// Final stop of the service
    pub destination: String,
    /// Platform, where published
    pub platform: Option<String>,
}

/// The board's current display model.
#[derive(Debug, Clone)]
pub struct BoardState {
    /// Station display name
    pub station_name: String,
    /// Rows in API order, at most the configured maximum
    pub rows: Vec<DisplayRow>,
    /// Status message shown instead of rows
    pub message: Option<String>,
    /// When this state was built
    pub updated_at: DateTime<Local>,
    /// Whether any fetch has completed yet
    pub loaded: bool,
}

impl BoardState {
    /// The state before the first fetch completes.
    pub fn empty() -> Self {
        Self {
            station_name: DEFAULT_STATION_NAME.to_string(),
            rows: Vec::new(),
            message: None,
            updated_at: Local::now(),
            loaded: false,
        }
    }
}

/// Build a fresh board state from a fetch result.
///
/// `now` is injected so the transform stays deterministic under test;
/// callers pass `Local::now()`.
pub fn build_board(
    payload: Option<&StationBoard>,
    max_results: usize,
    now: DateTime<Local>,
) -> BoardState {
    let Some(board) = payload else {
        return BoardState {
            station_name: DEFAULT_STATION_NAME.to_string(),
            rows: Vec::new(),
            message: Some(MSG_NO_DATA.to_string()),
            updated_at: now,
            loaded: true,
        };
    };

    let station_name = board
        .location_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_STATION_NAME)
        .to_string();

    let services = board.train_services.as_deref().unwrap_or(&[]);

    if services.is_empty() {
        return BoardState {
            station_name,
            rows: Vec::new(),
            message: Some(MSG_NO_DEPARTURES.to_string()),
            updated_at: now,
            loaded: true,
        };
    }

    let rows = services
        .iter()
        .take(max_results)
        .map(display_row)
        .collect();

    BoardState {
        station_name,
        rows,
        message: None,
        updated_at: now,
        loaded: true,
    }
}

/// Map one service to a display row.
///
/// Nested fields the payload left out fail soft to a dash rather than
/// aborting the transform. The destination is the *last* entry of the
/// destination list: earlier entries are via-points.
fn display_row(service: &TrainService) -> DisplayRow {
    let origin = service
        .origin
        .as_ref()
        .and_then(|loc| loc.location_name.clone())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let destination = service
        .destination
        .as_deref()
        .and_then(|dests| dests.last())
        .and_then(|loc| loc.location_name.clone())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    DisplayRow {
        planned_departure: service
            .std
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        actual_departure: service.etd.clone(),
        origin,
        destination,
        platform: service.platform.clone(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::huxley::ServiceLocation;
    use proptest::prelude::*;

    proptest! {
        /// Row count is always min(services, max_results)
        #[test]
        fn row_count_bounded(m in 0usize..40, n in 0usize..12) {
            let services: Vec<TrainService> = (0..m)
                .map(|i| TrainService {
                    std: Some(format!("{:02}:{:02}", i / 60 % 24, i % 60)),
                    etd: None,
                    origin: None,
                    destination: Some(vec![ServiceLocation {
                        location_name: Some("Reading".to_string()),
                    }]),
                    platform: None,
                })
                .collect();
            let board = StationBoard {
                location_name: Some("Test".to_string()),
                train_services: Some(services),
            };

            let state = build_board(Some(&board), n, Local::now());

            prop_assert_eq!(state.rows.len(), m.min(n));
            prop_assert!(state.loaded);
        }
    }
}
