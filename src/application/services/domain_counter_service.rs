//! Per-domain usage counting.

use std::sync::Arc;

use crate::domain::entities::DomainCount;
use crate::domain::repositories::DomainCountRepository;
use crate::error::AppError;
use crate::utils::extract_domain::extract_domain_from_url;
use serde_json::json;

/// Number of domains reported by `GET /domain-counts`.
pub const DEFAULT_TOP_DOMAINS: i64 = 4;

/// Service that counts shortened URLs per domain and reports the busiest ones.
pub struct DomainCounterService {
    repository: Arc<dyn DomainCountRepository>,
}

impl DomainCounterService {
    /// Creates a new domain counter service.
    pub fn new(repository: Arc<dyn DomainCountRepository>) -> Self {
        Self { repository }
    }

    /// Increments the counter for `domain` by one.
    ///
    /// The increment is a single atomic upsert, so concurrent calls for the
    /// same domain never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty domain.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn increment(&self, domain: &str) -> Result<DomainCount, AppError> {
        if domain.is_empty() {
            return Err(AppError::bad_request("Domain must not be empty", json!({})));
        }

        self.repository.increment(domain).await
    }

    /// Increments the counter for the domain of `raw_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL has no host.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn increment_for_url(&self, raw_url: &str) -> Result<DomainCount, AppError> {
        let domain = extract_domain_from_url(raw_url)?;
        self.increment(&domain).await
    }

    /// Returns up to `limit` domains, most shortened first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is less than 1.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn top_domains(&self, limit: i64) -> Result<Vec<DomainCount>, AppError> {
        if limit < 1 {
            return Err(AppError::bad_request(
                "Limit must be at least 1",
                json!({ "limit": limit }),
            ));
        }

        self.repository.top(limit).await
    }

    /// Returns the counter of a single domain, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_for(&self, domain: &str) -> Result<Option<DomainCount>, AppError> {
        self.repository.find(domain).await
    }
}
