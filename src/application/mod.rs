//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Shortening and resolution
//! - [`services::domain_counter_service::DomainCounterService`] - Domain usage counters

pub mod services;
