//! Huxley API response DTOs.
//!
//! These types map directly to the Huxley departure board JSON. They use
//! `Option` liberally because the upstream omits fields rather than
//! sending null values in many cases, and they also implement `Serialize`
//! because the fetch-result event carries the payload through verbatim.

use serde::{Deserialize, Serialize};

/// A departure board response for one station.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationBoard {
    /// Human-readable name of the station.
    pub location_name: Option<String>,

    /// Upcoming train services, in the order the API returns them.
    pub train_services: Option<Vec<TrainService>>,
}

/// One upcoming service on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainService {
    /// Scheduled time of departure (e.g. "10:45").
    pub std: Option<String>,

    /// Estimated time of departure.
    /// May be "On time", "Delayed", "Cancelled", or a time like "10:52".
    pub etd: Option<String>,

    /// Where the service started.
    pub origin: Option<ServiceLocation>,

    /// Destination(s). The last entry is the final stop; earlier entries
    /// are via-points.
    pub destination: Option<Vec<ServiceLocation>>,

    /// Platform number/letter, where the station publishes one.
    pub platform: Option<String>,
}

/// Origin or destination location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    /// Human-readable station name.
    pub location_name: Option<String>,
}
