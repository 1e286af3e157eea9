//! Route definitions for the HTTP API.

pub mod health;
pub mod items;

use axum::Router;

use crate::error::route_not_found;
use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(items::routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(state)
}
