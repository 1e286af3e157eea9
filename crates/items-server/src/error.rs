//! API error types with JSON responses.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use items_core::{ErrorResponse, ValidationErrors};
use items_store::StoreError;

/// Message used for every validation failure envelope.
pub const VALIDATION_MESSAGE: &str = "Validation failed";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid input (400 for shape errors, 422 for a zero price alone).
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Store error.
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) | Self::Store(StoreError::ItemNotFound(_)) => "NOT_FOUND",
            Self::Internal(_) | Self::Store(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(errors) if errors.has_shape_errors() => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::ItemNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn into_body(self) -> ErrorResponse {
        match self {
            Self::Validation(errors) => {
                ErrorResponse::new("VALIDATION_ERROR", VALIDATION_MESSAGE, (&errors).into())
            }
            other => ErrorResponse::new(other.code(), other.to_string(), Vec::new()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Unhandled error while processing request");
        }

        (status, Json(self.into_body())).into_response()
    }
}

/// Fallback handler for requests that match no route.
pub async fn route_not_found(request: Request) -> ApiError {
    ApiError::NotFound(format!(
        "Route {} {} not found",
        request.method(),
        request.uri().path()
    ))
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
