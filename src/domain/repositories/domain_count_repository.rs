//! Repository trait for per-domain usage counters.

use crate::domain::entities::DomainCount;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for domain usage counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDomainCountRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainCountRepository: Send + Sync {
    /// Atomically increments the counter for `domain`, creating it at 1.
    ///
    /// Returns the counter after the increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment(&self, domain: &str) -> Result<DomainCount, AppError>;

    /// Returns up to `limit` counters ordered by count, highest first.
    ///
    /// Ties are ordered by domain name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top(&self, limit: i64) -> Result<Vec<DomainCount>, AppError>;

    /// Finds the counter for a single domain.
    async fn find(&self, domain: &str) -> Result<Option<DomainCount>, AppError>;
}
