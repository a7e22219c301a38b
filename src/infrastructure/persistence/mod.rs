//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters and `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgUrlMappingRepository`] - Reference key storage and lookup
//! - [`PgDomainCountRepository`] - Per-domain usage counters

pub mod pg_domain_count_repository;
pub mod pg_url_mapping_repository;

pub use pg_domain_count_repository::PgDomainCountRepository;
pub use pg_url_mapping_repository::PgUrlMappingRepository;
