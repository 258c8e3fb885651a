//! Error types for fetching and decoding the mountain feed.

use thiserror::Error;

/// Main error type for all mountain operations.
#[derive(Debug, Error)]
pub enum MountainError {
    /// URL could not be parsed or is not HTTP(S).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed (connect or read).
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The read loop observed a cancellation request.
    #[error("Fetch cancelled")]
    Cancelled,

    /// Background fetch task panicked or was aborted.
    #[error("Fetch task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    /// Nothing to parse because the fetch produced no body.
    #[error("No data to parse")]
    NoData,

    /// Body is not valid JSON.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Top-level JSON value is not an array.
    #[error("Expected a JSON array, got {0}")]
    NotAnArray(&'static str),

    /// Array element is not an object.
    #[error("Element {index} is not an object")]
    InvalidElement { index: usize },

    /// Required field is absent.
    #[error("Element {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// Required field has the wrong JSON type.
    #[error("Element {index}: field `{field}` is not {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

impl MountainError {
    /// Failures raised while talking to the network.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            MountainError::InvalidUrl(_)
                | MountainError::RequestError(_)
                | MountainError::HttpStatus { .. }
                | MountainError::Cancelled
                | MountainError::TaskFailed(_)
                | MountainError::NoData
        )
    }

    /// Failures raised while decoding the response body.
    pub fn is_parse(&self) -> bool {
        !self.is_network()
    }
}

/// Result type alias for mountain operations.
pub type Result<T> = std::result::Result<T, MountainError>;
