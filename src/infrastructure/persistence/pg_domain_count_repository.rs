//! PostgreSQL implementation of the domain count repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::DomainCount;
use crate::domain::repositories::DomainCountRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct DomainCountRow {
    domain_name: String,
    count: i64,
}

impl From<DomainCountRow> for DomainCount {
    fn from(row: DomainCountRow) -> Self {
        DomainCount::new(row.domain_name, row.count)
    }
}

/// PostgreSQL repository for per-domain counters.
///
/// Increments are a single `INSERT ... ON CONFLICT DO UPDATE`, so the row
/// lock taken by the upsert serializes concurrent increments of one domain.
pub struct PgDomainCountRepository {
    pool: Arc<PgPool>,
}

impl PgDomainCountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DomainCountRepository for PgDomainCountRepository {
    async fn increment(&self, domain: &str) -> Result<DomainCount, AppError> {
        let row = sqlx::query_as::<_, DomainCountRow>(
            r#"
            INSERT INTO url_count (domain_name, count)
            VALUES ($1, 1)
            ON CONFLICT (domain_name) DO UPDATE
                SET count = url_count.count + 1
            RETURNING domain_name, count
            "#,
        )
        .bind(domain)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn top(&self, limit: i64) -> Result<Vec<DomainCount>, AppError> {
        let rows = sqlx::query_as::<_, DomainCountRow>(
            r#"
            SELECT domain_name, count
            FROM url_count
            ORDER BY count DESC, domain_name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, domain: &str) -> Result<Option<DomainCount>, AppError> {
        let row = sqlx::query_as::<_, DomainCountRow>(
            r#"
            SELECT domain_name, count
            FROM url_count
            WHERE domain_name = $1
            "#,
        )
        .bind(domain)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
