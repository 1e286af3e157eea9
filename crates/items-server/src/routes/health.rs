//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use items_core::HealthResponse;

use crate::state::AppState;

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        uptime: state.uptime().as_secs_f64(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
