//! Shared state injected into every request handler.

use std::sync::Arc;

use crate::application::services::{DomainCounterService, MappingService};

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub domain_counter: Arc<DomainCounterService>,
    /// Base for generated short URLs. When `None`, `http://<Host header>` is used.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(
        mapping_service: Arc<MappingService>,
        domain_counter: Arc<DomainCounterService>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            mapping_service,
            domain_counter,
            public_base_url,
        }
    }
}
