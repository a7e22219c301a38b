//! PostgreSQL implementation of the URL mapping repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{MappingOutcome, NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(FromRow)]
struct UrlMappingRow {
    actual_url: String,
    reference_key: String,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(row: UrlMappingRow) -> Self {
        UrlMapping::new(row.actual_url, row.reference_key)
    }
}

/// PostgreSQL repository for reference key mappings.
///
/// Uses bound parameters for every query; no SQL is built from user input.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn insert_or_get(&self, new_mapping: NewUrlMapping) -> Result<MappingOutcome, AppError> {
        let inserted = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            INSERT INTO url_mapping (actual_url, reference_key)
            VALUES ($1, $2)
            ON CONFLICT (actual_url) DO NOTHING
            RETURNING actual_url, reference_key
            "#,
        )
        .bind(&new_mapping.actual_url)
        .bind(&new_mapping.reference_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = inserted {
            return Ok(MappingOutcome::created(row.into()));
        }

        // Lost the race: the conflicting row is committed, a fresh statement sees it.
        self.find_by_actual_url(&new_mapping.actual_url)
            .await?
            .map(MappingOutcome::existing)
            .ok_or_else(|| {
                AppError::internal(
                    "Storage error: conflicting mapping disappeared",
                    json!({ "url": new_mapping.actual_url }),
                )
            })
    }

    async fn find_by_actual_url(&self, actual_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT actual_url, reference_key
            FROM url_mapping
            WHERE actual_url = $1
            "#,
        )
        .bind(actual_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_reference_key(
        &self,
        reference_key: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT actual_url, reference_key
            FROM url_mapping
            WHERE reference_key = $1
            "#,
        )
        .bind(reference_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mapping")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
