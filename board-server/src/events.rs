//! Fetch request/result events.
//!
//! The widget never performs HTTP itself: it emits a request event keyed
//! by its resolved URL and later consumes a result event tagged with the
//! same URL. The JSON shape is part of the external interface, so both
//! directions serialize.

use serde::{Deserialize, Serialize};

use crate::huxley::StationBoard;

/// An event on the widget's fetch channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum BoardEvent {
    /// Ask the fetcher to retrieve the board at `url`.
    RequestDepartures { url: String },

    /// A fetch completed. `data` is the raw payload, or `None` when the
    /// fetch failed or the API returned nothing.
    DeparturesData {
        url: String,
        #[serde(default)]
        data: Option<StationBoard>,
    },
}
