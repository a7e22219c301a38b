//! Handler for domain usage statistics.

use axum::{Json, extract::State};

use crate::api::dto::domain_count::DomainCountItem;
use crate::application::services::DEFAULT_TOP_DOMAINS;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most shortened domains.
///
/// # Endpoint
///
/// `GET /domain-counts`
///
/// # Response
///
/// At most four entries, highest count first:
///
/// ```json
/// [
///   { "domain": "example.com", "count": 7 },
///   { "domain": "rust-lang.org", "count": 3 }
/// ]
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error on storage failures.
pub async fn domain_counts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DomainCountItem>>, AppError> {
    let top = state.domain_counter.top_domains(DEFAULT_TOP_DOMAINS).await?;

    Ok(Json(top.into_iter().map(DomainCountItem::from).collect()))
}
