//! Handlers for the legacy path-based route set.
//!
//! Mounted only when `LEGACY_ROUTES` is enabled.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{Redirect, Response},
};

use crate::api::dto::shorten::ShortenResponse;
use crate::api::handlers::resolve::redirect_to;
use crate::api::handlers::shorten::public_base;
use crate::error::AppError;
use crate::state::AppState;

/// Target of the fixed `GET /test` redirect.
pub const TEST_REDIRECT_TARGET: &str = "https://www.google.com";

/// Shortens a URL passed as a single percent-encoded path segment.
///
/// # Endpoint
///
/// `PUT /{url}`, e.g. `PUT /https%3A%2F%2Fexample.com%2Fa`
///
/// # Errors
///
/// Same as `POST /shorten`.
pub async fn legacy_shorten_handler(
    Path(url): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<ShortenResponse>, AppError> {
    let base = public_base(&state, &headers, &uri)?;

    let outcome = state.mapping_service.shorten(&url).await?;

    Ok(Json(ShortenResponse {
        shorten_url: state
            .mapping_service
            .short_url(&base, outcome.reference_key()),
    }))
}

/// Resolves a key with `308 Permanent Redirect`.
///
/// # Endpoint
///
/// `GET /{referenceKey}`
pub async fn legacy_resolve_handler(
    Path(reference_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.mapping_service.resolve(&reference_key).await?;

    redirect_to(StatusCode::PERMANENT_REDIRECT, &original_url)
}

/// Fixed redirect used as a liveness probe.
///
/// # Endpoint
///
/// `GET /test`
pub async fn legacy_test_handler() -> Redirect {
    Redirect::permanent(TEST_REDIRECT_TARGET)
}
