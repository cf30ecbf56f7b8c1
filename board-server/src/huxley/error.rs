//! Huxley client error types.

/// Errors from the Huxley HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum HuxleyError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid access token
    #[error("unauthorized (check the access token)")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by Huxley API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed; `body` carries a truncated snippet
    /// of the offending response for diagnosis
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HuxleyError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized (check the access token)");

        let err = HuxleyError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = HuxleyError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }
}
