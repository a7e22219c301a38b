//! Requires a PostgreSQL instance reachable through `DATABASE_URL`.
//! Run with `cargo test -- --ignored`.

use shortkey::domain::entities::NewUrlMapping;
use shortkey::domain::repositories::UrlMappingRepository;
use shortkey::infrastructure::persistence::PgUrlMappingRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_mapping(url: &str, key: &str) -> NewUrlMapping {
    NewUrlMapping {
        actual_url: url.to_string(),
        reference_key: key.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_insert_new_mapping(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let outcome = repo
        .insert_or_get(new_mapping("https://example.com/a", "k1"))
        .await
        .unwrap();

    assert!(outcome.is_new);
    assert_eq!(outcome.reference_key(), "k1");
    assert_eq!(outcome.mapping.actual_url, "https://example.com/a");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_insert_existing_url_returns_first_key(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    repo.insert_or_get(new_mapping("https://example.com/a", "k1"))
        .await
        .unwrap();

    let outcome = repo
        .insert_or_get(new_mapping("https://example.com/a", "k2"))
        .await
        .unwrap();

    assert!(!outcome.is_new);
    assert_eq!(outcome.reference_key(), "k1");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_find_by_reference_key(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    repo.insert_or_get(new_mapping("https://example.com/a", "k1"))
        .await
        .unwrap();

    let found = repo.find_by_reference_key("k1").await.unwrap();
    assert_eq!(found.unwrap().actual_url, "https://example.com/a");

    let missing = repo.find_by_reference_key("nope").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_find_by_actual_url_is_exact(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    repo.insert_or_get(new_mapping("https://example.com/a", "k1"))
        .await
        .unwrap();

    let found = repo
        .find_by_actual_url("https://example.com/a")
        .await
        .unwrap();
    assert_eq!(found.unwrap().reference_key, "k1");

    let other = repo
        .find_by_actual_url("https://example.com/a/")
        .await
        .unwrap();
    assert!(other.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
