//! TfL client error types.

use super::convert::ConversionError;

/// Errors from the TfL HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("TfL API request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The request did not complete within the client timeout
    #[error("TfL API timeout")]
    Timeout,

    /// API returned a non-success status.
    ///
    /// `message` is the API's own message when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response parsed but could not be normalized
    #[error("unexpected journey data: {0}")]
    Conversion(#[from] ConversionError),

    /// Could not build a request URL from the configured base
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TflError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TflError::Timeout
        } else {
            TflError::Http(err)
        }
    }
}
