//! WMATA client error types.

/// Errors from the WMATA upstream client.
#[derive(Debug, thiserror::Error)]
pub enum WmataError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock data could not be read
    #[error("mock data error: {message}")]
    Mock { message: String },

    /// Standard routes did not include the requested line
    #[error("no standard route for line {0}")]
    RouteNotFound(String),

    /// Client could not be configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}
