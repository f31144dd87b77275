//! Error types for the media API client.
//!
//! # Design
//! One failure taxonomy, no recovery: every error is handed back to the
//! caller unmodified. Non-success statuses all land in `Http` with the raw
//! status code and body for debugging — callers get no finer classification
//! than "the request failed".

use std::fmt;

/// Errors returned by `PhotosClient` and `UsersClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The request never completed — connection refused, DNS failure, or
    /// any other error raised by the HTTP transport.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Transport(msg) => {
                write!(f, "request failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
