#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shortkey::application::services::{DomainCounterService, MappingService};
use shortkey::domain::entities::{DomainCount, MappingOutcome, NewUrlMapping, UrlMapping};
use shortkey::domain::repositories::{DomainCountRepository, UrlMappingRepository};
use shortkey::error::AppError;
use shortkey::state::AppState;

pub const TEST_BASE: &str = "http://sho.rt";

/// Mapping store backed by a `HashMap`, keyed by the original URL.
#[derive(Default)]
pub struct InMemoryUrlMappingRepository {
    by_url: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl UrlMappingRepository for InMemoryUrlMappingRepository {
    async fn insert_or_get(&self, new_mapping: NewUrlMapping) -> Result<MappingOutcome, AppError> {
        let mut by_url = self.by_url.lock().unwrap();

        if let Some(key) = by_url.get(&new_mapping.actual_url) {
            return Ok(MappingOutcome::existing(UrlMapping::new(
                new_mapping.actual_url,
                key.clone(),
            )));
        }

        by_url.insert(
            new_mapping.actual_url.clone(),
            new_mapping.reference_key.clone(),
        );

        Ok(MappingOutcome::created(UrlMapping::new(
            new_mapping.actual_url,
            new_mapping.reference_key,
        )))
    }

    async fn find_by_actual_url(&self, actual_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let by_url = self.by_url.lock().unwrap();

        Ok(by_url
            .get(actual_url)
            .map(|key| UrlMapping::new(actual_url.to_string(), key.clone())))
    }

    async fn find_by_reference_key(
        &self,
        reference_key: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let by_url = self.by_url.lock().unwrap();

        Ok(by_url
            .iter()
            .find(|(_, key)| key.as_str() == reference_key)
            .map(|(url, key)| UrlMapping::new(url.clone(), key.clone())))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.by_url.lock().unwrap().len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Domain counters backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryDomainCountRepository {
    counts: Mutex<HashMap<String, i64>>,
}

#[async_trait]
impl DomainCountRepository for InMemoryDomainCountRepository {
    async fn increment(&self, domain: &str) -> Result<DomainCount, AppError> {
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(domain.to_string()).or_insert(0);
        *count += 1;

        Ok(DomainCount::new(domain.to_string(), *count))
    }

    async fn top(&self, limit: i64) -> Result<Vec<DomainCount>, AppError> {
        let counts = self.counts.lock().unwrap();

        let mut all: Vec<DomainCount> = counts
            .iter()
            .map(|(domain, count)| DomainCount::new(domain.clone(), *count))
            .collect();
        all.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.domain_name.cmp(&b.domain_name))
        });
        all.truncate(limit as usize);

        Ok(all)
    }

    async fn find(&self, domain: &str) -> Result<Option<DomainCount>, AppError> {
        let counts = self.counts.lock().unwrap();

        Ok(counts
            .get(domain)
            .map(|count| DomainCount::new(domain.to_string(), *count)))
    }
}

/// Mapping store whose every call fails like an unreachable database.
pub struct FailingUrlMappingRepository;

fn storage_down() -> AppError {
    AppError::internal("Storage error: connection refused", json!({}))
}

#[async_trait]
impl UrlMappingRepository for FailingUrlMappingRepository {
    async fn insert_or_get(&self, _: NewUrlMapping) -> Result<MappingOutcome, AppError> {
        Err(storage_down())
    }

    async fn find_by_actual_url(&self, _: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(storage_down())
    }

    async fn find_by_reference_key(&self, _: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(storage_down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(storage_down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(storage_down())
    }
}

fn state_with(
    mappings: Arc<dyn UrlMappingRepository>,
    public_base_url: Option<String>,
) -> AppState {
    let domain_counter = Arc::new(DomainCounterService::new(Arc::new(
        InMemoryDomainCountRepository::default(),
    )));
    let mapping_service = Arc::new(MappingService::new(mappings, domain_counter.clone()));

    AppState::new(mapping_service, domain_counter, public_base_url)
}

/// State over in-memory stores; short URLs are built from the `Host` header.
pub fn create_test_state() -> AppState {
    state_with(Arc::new(InMemoryUrlMappingRepository::default()), None)
}

/// State over in-memory stores with a fixed public base.
pub fn create_test_state_with_base(base: &str) -> AppState {
    state_with(
        Arc::new(InMemoryUrlMappingRepository::default()),
        Some(base.to_string()),
    )
}

/// State whose mapping store is down.
pub fn create_failing_state() -> AppState {
    state_with(
        Arc::new(FailingUrlMappingRepository),
        Some(TEST_BASE.to_string()),
    )
}

/// Extracts the reference key from a short URL.
pub fn key_of(shorten_url: &str) -> String {
    shorten_url
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
