//! Shortening and resolution of URLs.

use std::sync::Arc;

use crate::application::services::DomainCounterService;
use crate::domain::entities::{MappingOutcome, NewUrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::key_generator::generate_reference_key;
use crate::utils::url_validator::validate_absolute_url;
use serde_json::json;

/// Service for creating and resolving reference keys.
///
/// A URL is mapped to at most one key: shortening an already known URL
/// returns its existing key. Newly created mappings bump the domain counter.
pub struct MappingService {
    repository: Arc<dyn UrlMappingRepository>,
    domain_counter: Arc<DomainCounterService>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        domain_counter: Arc<DomainCounterService>,
    ) -> Self {
        Self {
            repository,
            domain_counter,
        }
    }

    /// Returns the reference key for `raw_url`, creating one if needed.
    ///
    /// The URL is stored exactly as given. When the URL is new, a random
    /// UUID key is inserted; if another request inserted the same URL in the
    /// meantime, that request's key is returned instead.
    ///
    /// Counting the domain is best-effort: a failed increment is logged and
    /// the shorten still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not absolute with a host.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, raw_url: &str) -> Result<MappingOutcome, AppError> {
        validate_absolute_url(raw_url).map_err(|e| {
            AppError::bad_request(
                "Invalid URL",
                json!({ "url": raw_url, "reason": e.to_string() }),
            )
        })?;

        if let Some(existing) = self.repository.find_by_actual_url(raw_url).await? {
            tracing::debug!(key = %existing.reference_key, "URL already shortened");
            return Ok(MappingOutcome::existing(existing));
        }

        let outcome = self
            .repository
            .insert_or_get(NewUrlMapping {
                actual_url: raw_url.to_string(),
                reference_key: generate_reference_key(),
            })
            .await?;

        if outcome.is_new {
            tracing::info!(key = %outcome.reference_key(), "Created short link");

            if let Err(e) = self.domain_counter.increment_for_url(raw_url).await {
                tracing::warn!("Failed to update domain count for {}: {}", raw_url, e);
            }
        }

        Ok(outcome)
    }

    /// Returns the original URL stored under `reference_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key is empty.
    /// Returns [`AppError::NotFound`] if no mapping has this key.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, reference_key: &str) -> Result<String, AppError> {
        if reference_key.is_empty() {
            return Err(AppError::bad_request(
                "Missing 'referenceKey' in path parameter",
                json!({}),
            ));
        }

        self.repository
            .find_by_reference_key(reference_key)
            .await?
            .map(|mapping| mapping.actual_url)
            .ok_or_else(|| {
                AppError::not_found(
                    "URL not found for the given reference key",
                    json!({ "reference_key": reference_key }),
                )
            })
    }

    /// Builds the public short URL for a key.
    ///
    /// `base` is a scheme and authority such as `http://localhost:3000`.
    pub fn short_url(&self, base: &str, reference_key: &str) -> String {
        format!("{}/resolve/{}", base.trim_end_matches('/'), reference_key)
    }

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that the mapping store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store does not answer.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
