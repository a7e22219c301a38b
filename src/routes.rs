//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`                 - Shorten a URL
//! - `GET  /resolve/{referenceKey}`  - Redirect to the original URL
//! - `GET  /domain-counts`           - Most shortened domains
//! - `GET  /health`                  - Health check
//! - legacy routes (`PUT /{url}`, `GET /{referenceKey}`, `GET /test`) when enabled
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Recovery** - Panics become JSON 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{recovery, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and per-request middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `legacy_routes` - when `true`, also mounts the path-based legacy API
pub fn build_router(state: AppState, legacy_routes: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes());

    if legacy_routes {
        router = router.merge(api::routes::legacy_routes());
    }

    router
        .with_state(state)
        .layer(recovery::layer())
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] with trailing
/// slashes trimmed before routing.
pub fn app_router(state: AppState, legacy_routes: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, legacy_routes))
}
