//! UK rail departure board.
//!
//! A widget that periodically fetches a National Rail departure board
//! through a Huxley endpoint, shapes the response into a small display
//! model, and renders it as an HTML table. The widget core is
//! host-agnostic; the `web` module is the bundled host that drives the
//! update timer and serves the rendered board.

pub mod board;
pub mod config;
pub mod events;
pub mod huxley;
pub mod scheduler;
pub mod station;
pub mod web;
pub mod widget;
