//! items-server: HTTP API server for the items catalog
//!
//! This crate provides:
//! - REST endpoints for creating, listing, reading, updating, and deleting items
//! - Validating extractors that report every offending field
//! - A health endpoint with server uptime
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses, redacted in production
//!
//! # Usage
//!
//! ```rust,ignore
//! use items_server::{app, AppState, ServerConfig};
//! use items_store::ItemService;
//!
//! let config = ServerConfig::from_env()?;
//! let router = app(AppState::new(ItemService::in_memory(), config));
//! axum::serve(listener, router).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, middleware::from_fn_with_state};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::middleware::redact::redact_internal_errors;
use crate::middleware::request_id::{propagate_request_id_layer, request_id_layer, request_span};

// Re-exports for convenience
pub use config::{ConfigError, CorsOrigin, RunMode, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use items_core;
pub use items_store;

/// Build the router with the full middleware stack.
///
/// The request id is assigned outermost so the trace span and the echoed
/// response header both see it.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors_origin);

    routes::build_router(state.clone())
        .layer(from_fn_with_state(state, redact_internal_errors))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors)
        .layer(request_id_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_request_id_generated_and_echoed() {
        let response = app(AppState::in_memory())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));

        let response = app(AppState::in_memory())
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn test_request_id_echoed_on_errors() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::get("/missing")
                    .header("x-request-id", "err-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-request-id"], "err-42");
    }

    #[tokio::test]
    async fn test_cors_mirrors_origin_with_credentials() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn test_production_redacts_server_errors() {
        async fn boom() -> ApiError {
            ApiError::Internal("database exploded".to_string())
        }

        let config = ServerConfig {
            mode: RunMode::Production,
            ..Default::default()
        };
        let state = AppState::new(items_store::ItemService::in_memory(), config);
        let router = Router::new()
            .route("/boom", axum::routing::get(boom))
            .layer(from_fn_with_state(state, redact_internal_errors));

        let response = router
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL_SERVER_ERROR");
        assert_eq!(json["error"]["message"], "An unexpected error occurred");
    }

    #[tokio::test]
    async fn test_development_keeps_server_error_message() {
        async fn boom() -> ApiError {
            ApiError::Internal("database exploded".to_string())
        }

        let state = AppState::in_memory();
        let router = Router::new()
            .route("/boom", axum::routing::get(boom))
            .layer(from_fn_with_state(state, redact_internal_errors));

        let response = router
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["message"], "database exploded");
    }
}
