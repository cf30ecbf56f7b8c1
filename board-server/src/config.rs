//! Departure board configuration.
//!
//! Holds the options the host passes to the widget and resolves the
//! request URL by substituting station codes and the access token into
//! the endpoint template.

use std::time::Duration;

use url::Url;

use crate::station::Crs;

/// Default endpoint template. Placeholders `{from}`, `{to}` and `{token}`
/// are substituted at URL-build time.
pub const DEFAULT_API_BASE: &str =
    "https://huxley2.azurewebsites.net/departures/{from}/to/{to}?accessToken={token}";

/// Default refresh interval (5 minutes).
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Default maximum number of rows on the board.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Fraction of the list at which row fading starts by default.
pub const DEFAULT_FADE_POINT: f64 = 0.25;

/// Errors from an incomplete or unusable configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No API access token was supplied
    #[error("access token is not set")]
    MissingToken,

    /// No origin station was supplied
    #[error("origin station is not set")]
    MissingOrigin,

    /// No destination station was supplied
    #[error("destination station is not set")]
    MissingDestination,

    /// The endpoint template did not resolve to a valid URL
    #[error("invalid endpoint template: {0}")]
    InvalidEndpoint(String),
}

/// Configuration for the departure board widget.
///
/// Defaults match a conventional board: refresh every 5 minutes, no
/// initial delay, 5 rows, live departure column on, platform and origin
/// columns off, fading from a quarter of the way down the list.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Endpoint template with `{from}`, `{to}` and `{token}` placeholders
    pub api_base: String,
    /// API access token; the widget degrades to a "configure me" display
    /// when this is empty
    pub access_token: String,
    /// Origin station
    pub from: Option<Crs>,
    /// Destination station used to filter the board
    pub to: Option<Crs>,
    /// How often to refresh the board
    pub update_interval: Duration,
    /// Delay before the first fetch
    pub initial_load_delay: Duration,
    /// Maximum number of rows to display
    pub max_results: usize,
    /// Show the origin column
    pub show_origin: bool,
    /// Show the platform column
    pub show_platform: bool,
    /// Show the live departure column
    pub show_actual_departure: bool,
    /// Fade later rows towards transparency
    pub fade: bool,
    /// Fraction of the list at which fading starts (0-1)
    pub fade_point: f64,
    /// Log the resolved URL and payloads at a higher level
    pub debug: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            access_token: String::new(),
            from: None,
            to: None,
            update_interval: DEFAULT_UPDATE_INTERVAL,
            initial_load_delay: Duration::ZERO,
            max_results: DEFAULT_MAX_RESULTS,
            show_origin: false,
            show_platform: false,
            show_actual_departure: true,
            fade: true,
            fade_point: DEFAULT_FADE_POINT,
            debug: false,
        }
    }
}

impl BoardConfig {
    /// Create a config for the given station pair and access token.
    pub fn new(from: Crs, to: Crs, access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    /// Set a custom endpoint template.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the refresh interval.
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Set the delay before the first fetch.
    pub fn with_initial_load_delay(mut self, delay: Duration) -> Self {
        self.initial_load_delay = delay;
        self
    }

    /// Set the maximum number of rows.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Toggle the platform column.
    pub fn with_show_platform(mut self, show: bool) -> Self {
        self.show_platform = show;
        self
    }

    /// Toggle the origin column.
    pub fn with_show_origin(mut self, show: bool) -> Self {
        self.show_origin = show;
        self
    }

    /// Toggle the live departure column.
    pub fn with_show_actual_departure(mut self, show: bool) -> Self {
        self.show_actual_departure = show;
        self
    }

    /// Configure row fading.
    pub fn with_fade(mut self, fade: bool, fade_point: f64) -> Self {
        self.fade = fade;
        self.fade_point = fade_point;
        self
    }

    /// Resolve the request URL from the endpoint template.
    ///
    /// Substitutes the station codes and token, then parses the result so
    /// any characters the token contains end up percent-encoded.
    pub fn request_url(&self) -> Result<String, ConfigError> {
        if self.access_token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        let from = self.from.ok_or(ConfigError::MissingOrigin)?;
        let to = self.to.ok_or(ConfigError::MissingDestination)?;

        let raw = self
            .api_base
            .replace("{from}", from.as_str())
            .replace("{to}", to.as_str())
            .replace("{token}", &self.access_token);

        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidEndpoint(e.to_string()))?;
        Ok(url.into())
    }

    /// Check that the configuration is complete enough to fetch with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.request_url().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> (Crs, Crs) {
        (Crs::parse("PAD").unwrap(), Crs::parse("RDG").unwrap())
    }

    #[test]
    fn defaults() {
        let config = BoardConfig::default();

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.update_interval, Duration::from_secs(300));
        assert_eq!(config.initial_load_delay, Duration::ZERO);
        assert_eq!(config.max_results, 5);
        assert!(!config.show_origin);
        assert!(!config.show_platform);
        assert!(config.show_actual_departure);
        assert!(config.fade);
        assert_eq!(config.fade_point, 0.25);
        assert!(!config.debug);
    }

    #[test]
    fn builder() {
        let (from, to) = stations();
        let config = BoardConfig::new(from, to, "tok")
            .with_api_base("https://example.com/{from}/{to}?t={token}")
            .with_update_interval(Duration::from_secs(60))
            .with_initial_load_delay(Duration::from_secs(2))
            .with_max_results(10)
            .with_show_platform(true)
            .with_show_origin(true)
            .with_show_actual_departure(false)
            .with_fade(false, 0.5);

        assert_eq!(config.api_base, "https://example.com/{from}/{to}?t={token}");
        assert_eq!(config.update_interval, Duration::from_secs(60));
        assert_eq!(config.initial_load_delay, Duration::from_secs(2));
        assert_eq!(config.max_results, 10);
        assert!(config.show_platform);
        assert!(config.show_origin);
        assert!(!config.show_actual_departure);
        assert!(!config.fade);
        assert_eq!(config.fade_point, 0.5);
    }

    #[test]
    fn request_url_substitutes_placeholders() {
        let (from, to) = stations();
        let config = BoardConfig::new(from, to, "secret-token");

        let url = config.request_url().unwrap();
        assert_eq!(
            url,
            "https://huxley2.azurewebsites.net/departures/PAD/to/RDG?accessToken=secret-token"
        );
    }

    #[test]
    fn request_url_percent_encodes_token() {
        let (from, to) = stations();
        let config = BoardConfig::new(from, to, "with space");

        let url = config.request_url().unwrap();
        assert!(url.ends_with("accessToken=with%20space"), "url was {url}");
    }

    #[test]
    fn missing_token_is_an_error() {
        let (from, to) = stations();
        let mut config = BoardConfig::new(from, to, "tok");
        config.access_token = String::new();

        assert_eq!(config.request_url(), Err(ConfigError::MissingToken));
        assert_eq!(config.validate(), Err(ConfigError::MissingToken));
    }

    #[test]
    fn missing_stations_are_errors() {
        let (from, to) = stations();

        let mut config = BoardConfig::new(from, to, "tok");
        config.from = None;
        assert_eq!(config.request_url(), Err(ConfigError::MissingOrigin));

        let mut config = BoardConfig::new(from, to, "tok");
        config.to = None;
        assert_eq!(config.request_url(), Err(ConfigError::MissingDestination));
    }

    #[test]
    fn unparseable_template_is_an_error() {
        let (from, to) = stations();
        let config = BoardConfig::new(from, to, "tok").with_api_base("not a url {from}{to}{token}");

        assert!(matches!(
            config.request_url(),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }
}
