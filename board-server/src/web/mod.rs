//! Web layer: the host adapter that displays the widget.
//!
//! Serves the rendered board as HTML, with a fragment endpoint for
//! embedding hosts and static CSS alongside.

mod routes;
mod state;
pub mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::{BoardTemplate, IndexTemplate};
