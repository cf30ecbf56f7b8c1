//! Huxley (Darwin LDB proxy) API support.
//!
//! Huxley serves National Rail live departure boards as JSON. The widget
//! builds a fully resolved board URL from its configuration; this module
//! provides the response DTOs and an HTTP client that fetches such a URL.

mod client;
mod error;
mod types;

pub use client::HuxleyClient;
pub use error::HuxleyError;
pub use types::{ServiceLocation, StationBoard, TrainService};
