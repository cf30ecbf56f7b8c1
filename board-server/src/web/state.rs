//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::widget::DepartureBoardWidget;

/// Shared application state.
///
/// The widget sits behind a lock because the update timer writes fetch
/// results into it while request handlers read it to render.
#[derive(Clone)]
pub struct AppState {
    /// The departure board widget
    pub widget: Arc<RwLock<DepartureBoardWidget>>,
}

impl AppState {
    /// Create a new app state around an already-shared widget.
    pub fn new(widget: Arc<RwLock<DepartureBoardWidget>>) -> Self {
        Self { widget }
    }
}
