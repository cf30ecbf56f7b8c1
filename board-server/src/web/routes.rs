//! HTTP route handlers.

use askama::Template;
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;

use super::state::AppState;
use super::templates::{BoardTemplate, IndexTemplate};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/board", get(board_fragment))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Full page: shell plus the current board.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let widget = state.widget.read().await;
    let board = BoardTemplate::from_widget(&widget);

    let refresh_secs = widget.config().update_interval.as_secs().max(1);
    let page = IndexTemplate {
        station_name: board.station_name.clone(),
        refresh_secs,
        board: board
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    };

    Html(
        page.render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// The board table alone, for embedding hosts.
async fn board_fragment(State(state): State<AppState>) -> BoardTemplate {
    let widget = state.widget.read().await;
    BoardTemplate::from_widget(&widget)
}
