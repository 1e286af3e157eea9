//! Hides internal error messages from clients in production.

use axum::{
    Json,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use items_core::ErrorResponse;

use crate::state::AppState;

/// Message sent in place of any 500 error in production.
pub const REDACTED_MESSAGE: &str = "An unexpected error occurred";

/// Replace the body of 500 responses when running in production mode.
///
/// Status and headers other than the body framing are kept.
pub async fn redact_internal_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if !state.config().mode.is_production() || !response.status().is_server_error() {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.remove(header::CONTENT_TYPE);

    let body = Json(ErrorResponse::new(
        "INTERNAL_SERVER_ERROR",
        REDACTED_MESSAGE,
        Vec::new(),
    ));
    (parts, body).into_response()
}
