//! Huxley HTTP client.
//!
//! Fetches a fully resolved departure board URL. The widget owns URL
//! construction (station codes and token are substituted at config time),
//! so the client's only job is the GET and the decode.

use std::time::Duration;

use tracing::debug;

use super::error::HuxleyError;
use super::types::StationBoard;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an undecodable body to keep for diagnostics.
const BODY_SNIPPET_CHARS: usize = 500;

/// HTTP client for Huxley departure boards.
#[derive(Debug, Clone)]
pub struct HuxleyClient {
    http: reqwest::Client,
}

impl HuxleyClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self, HuxleyError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HuxleyError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Fetch a departure board.
    ///
    /// Returns `Ok(None)` when the API answers with an empty or `null`
    /// body; the board treats that as its "no data returned" state rather
    /// than an error.
    pub async fn get_board(&self, url: &str) -> Result<Option<StationBoard>, HuxleyError> {
        debug!(%url, "requesting departure board");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(HuxleyError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(HuxleyError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HuxleyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        // Huxley returns null/empty for stations it has nothing for
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let board = serde_json::from_str(&body).map_err(|e| HuxleyError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })?;

        Ok(Some(board))
    }
}
