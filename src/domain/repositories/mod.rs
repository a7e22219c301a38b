//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UrlMappingRepository`] - Reference key storage and lookup
//! - [`DomainCountRepository`] - Per-domain usage counters
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod domain_count_repository;
pub mod url_mapping_repository;

pub use domain_count_repository::DomainCountRepository;
pub use url_mapping_repository::UrlMappingRepository;

#[cfg(test)]
pub use domain_count_repository::MockDomainCountRepository;
#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
