//! Handlers for reference key resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a reference key to its original URL.
///
/// # Endpoint
///
/// `GET /resolve/{referenceKey}`
///
/// Responds with `301 Moved Permanently` and the stored URL, unchanged, in
/// the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the key was never issued.
/// Returns 500 Internal Server Error on storage failures.
pub async fn resolve_handler(
    Path(reference_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.mapping_service.resolve(&reference_key).await?;

    redirect_to(StatusCode::MOVED_PERMANENTLY, &original_url)
}

/// Answers `GET /resolve` without a key.
///
/// # Errors
///
/// Always returns 400 Bad Request.
pub async fn missing_key_handler() -> AppError {
    AppError::bad_request("Missing 'referenceKey' in path parameter", json!({}))
}

/// Builds a redirect with an arbitrary status.
///
/// Stored URLs were validated on the way in, but a value that still cannot
/// be sent as a header yields a 500 instead of a panic.
pub(crate) fn redirect_to(status: StatusCode, location: &str) -> Result<Response, AppError> {
    let location_value = HeaderValue::try_from(location).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "url": location }),
        )
    })?;

    Ok((status, [(header::LOCATION, location_value)]).into_response())
}
