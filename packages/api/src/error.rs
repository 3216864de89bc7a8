//! Errors returned by the notes API client.

use thiserror::Error;

/// Failure talking to the notes API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset, CORS).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON envelope.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-success status and this message.
    #[error("{0}")]
    Rejected(String),

    /// Client-side validation failed before any request was sent.
    #[error("{0}")]
    Invalid(String),
}
