//! The departure board widget.
//!
//! Host-agnostic core: it owns the configuration, the resolved request
//! URL, the current board state, and a visibility flag. The host drives
//! it with three calls — ask for a fetch request on each timer tick, feed
//! fetch results back in, and read the state to render.

use chrono::Local;
use tracing::{debug, warn};

use crate::board::{BoardState, build_board};
use crate::config::{BoardConfig, ConfigError};
use crate::events::BoardEvent;

/// A single-station departure board.
#[derive(Debug)]
pub struct DepartureBoardWidget {
    config: BoardConfig,
    /// Resolved request URL; `None` when the configuration is unusable.
    url: Option<String>,
    /// Why the URL could not be resolved, for the degraded display.
    config_error: Option<ConfigError>,
    state: BoardState,
    visible: bool,
}

impl DepartureBoardWidget {
    /// Create a widget from its configuration.
    ///
    /// An incomplete configuration (missing token or stations) is not an
    /// error: the widget starts in a degraded mode that renders the
    /// problem inline and never requests a fetch.
    pub fn new(config: BoardConfig) -> Self {
        let (url, config_error) = match config.request_url() {
            Ok(url) => {
                if config.debug {
                    warn!(%url, "departure board request URL");
                }
                (Some(url), None)
            }
            Err(e) => {
                warn!("departure board not configured: {e}");
                (None, Some(e))
            }
        };

        Self {
            config,
            url,
            config_error,
            state: BoardState::empty(),
            visible: true,
        }
    }

    /// The fetch request to issue this tick, if any.
    ///
    /// Returns `None` while the widget is hidden or unconfigured. The
    /// scheduler calls this once per tick; in-flight requests are not
    /// tracked, so overlapping responses simply apply in arrival order.
    pub fn fetch_request(&self) -> Option<BoardEvent> {
        if !self.visible {
            return None;
        }
        let url = self.url.clone()?;
        Some(BoardEvent::RequestDepartures { url })
    }

    /// Consume a fetch result.
    ///
    /// Results whose URL does not match the widget's current URL are
    /// stale (or meant for someone else) and are dropped without touching
    /// the state. Returns whether the host should redraw — `true` for
    /// every consumed result, including message-only states.
    pub fn on_fetch_result(&mut self, event: &BoardEvent) -> bool {
        let BoardEvent::DeparturesData { url, data } = event else {
            return false;
        };

        if Some(url.as_str()) != self.url.as_deref() {
            debug!(%url, "dropping fetch result for unknown URL");
            return false;
        }

        self.state = build_board(data.as_ref(), self.config.max_results, Local::now());
        if self.config.debug {
            debug!(rows = self.state.rows.len(), status = ?self.state.message, "board rebuilt");
        }
        true
    }

    /// Current display model.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The widget's configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Why the widget is unconfigured, if it is.
    pub fn config_error(&self) -> Option<&ConfigError> {
        self.config_error.as_ref()
    }

    /// Whether the widget is currently shown to the user.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Host-driven visibility. Hidden widgets skip fetches at tick time.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
