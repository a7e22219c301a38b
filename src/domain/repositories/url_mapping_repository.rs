//! Repository trait for URL mapping data access.

use crate::domain::entities::{MappingOutcome, NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reference key mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Inserts a mapping, or returns the one already stored for the same URL.
    ///
    /// The store holds a unique constraint on `actual_url`, so two concurrent
    /// calls for the same URL never produce two rows. Exactly one of them sees
    /// [`MappingOutcome::is_new`] set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_or_get(&self, new_mapping: NewUrlMapping) -> Result<MappingOutcome, AppError>;

    /// Finds a mapping by its original URL (exact string match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_actual_url(&self, actual_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its reference key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_reference_key(
        &self,
        reference_key: &str,
    ) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
