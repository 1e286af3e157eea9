//! CORS layer built from configuration.

use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::request_id::REQUEST_ID_HEADER;
use crate::config::CorsOrigin;

/// Build the CORS layer for `origin`.
///
/// Credentials are allowed, so wildcard origins are never sent; `Mirror`
/// echoes the caller's `Origin` back instead.
pub fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let allow_origin = match origin {
        CorsOrigin::Mirror => AllowOrigin::mirror_request(),
        CorsOrigin::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, REQUEST_ID_HEADER])
}
