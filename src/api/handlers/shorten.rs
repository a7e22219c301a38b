//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_domain::extract_request_host;

/// Returns the short URL for a long URL, creating the mapping if needed.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortenUrl": "http://localhost:3000/resolve/67e55044-10b1-426f-9247-bb680e5fe0c8" }
/// ```
///
/// Shortening a URL that is already stored returns its existing key.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, a missing `url` or a URL that
/// is not absolute.
/// Returns 500 Internal Server Error on storage failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let base = public_base(&state, &headers, &uri)?;

    let outcome = state.mapping_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        shorten_url: state
            .mapping_service
            .short_url(&base, outcome.reference_key()),
    }))
}

/// Resolves the scheme and authority used in generated short URLs.
pub(crate) fn public_base(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, AppError> {
    match &state.public_base_url {
        Some(base) => Ok(base.clone()),
        None => Ok(format!("http://{}", extract_request_host(headers, uri)?)),
    }
}
