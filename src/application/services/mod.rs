//! Business logic services for the application layer.

pub mod domain_counter_service;
pub mod mapping_service;

pub use domain_counter_service::{DEFAULT_TOP_DOMAINS, DomainCounterService};
pub use mapping_service::MappingService;
