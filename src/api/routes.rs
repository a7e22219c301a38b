//! API route configuration.

use crate::api::handlers::{
    domain_counts_handler, legacy_resolve_handler, legacy_shorten_handler, legacy_test_handler,
    missing_key_handler, resolve_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// The JSON API.
///
/// # Endpoints
///
/// - `POST /shorten`                  - Shorten a URL
/// - `GET  /resolve/{referenceKey}`   - 301 redirect to the original URL
/// - `GET  /resolve`                  - 400, key missing
/// - `GET  /domain-counts`            - Top four domains by shortening count
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/resolve", get(missing_key_handler))
        .route("/resolve/{reference_key}", get(resolve_handler))
        .route("/domain-counts", get(domain_counts_handler))
}

/// The path-based legacy API.
///
/// # Endpoints
///
/// - `PUT /{url}`           - Shorten a percent-encoded URL
/// - `GET /{referenceKey}`  - 308 redirect to the original URL
/// - `GET /test`            - Fixed 308 redirect
///
/// Static routes such as `/health` or `/domain-counts` take precedence over
/// the `/{referenceKey}` capture.
pub fn legacy_routes() -> Router<AppState> {
    Router::new().route("/test", get(legacy_test_handler)).route(
        "/{reference_key}",
        get(legacy_resolve_handler).put(legacy_shorten_handler),
    )
}
