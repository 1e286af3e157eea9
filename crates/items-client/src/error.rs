//! Error types for the API client.

use items_core::ErrorDetail;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Code used when a failed response carries no error envelope.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Errors returned by [`crate::ItemsApi`] implementations.
///
/// `Display` is the message shown to users and stored in hook state.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        details: Vec<ErrorDetail>,
    },

    /// The request never produced a usable response.
    #[error("Network error: {0}")]
    Network(String),
}

impl ClientError {
    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }

    /// Machine-readable code of an API error.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            Self::Network(_) => None,
        }
    }

    /// Field-level details of a validation failure.
    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            Self::Api { details, .. } => details,
            Self::Network(_) => &[],
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
