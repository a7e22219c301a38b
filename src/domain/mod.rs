//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures (URL mappings and domain counts)
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or SQL. Repository traits are
//! implemented in [`crate::infrastructure::persistence`] and consumed by the
//! services in [`crate::application::services`].

pub mod entities;
pub mod repositories;
