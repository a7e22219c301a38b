//! Helpers shared across layers.
//!
//! - [`extract_domain`] - Domain extraction from URLs and the `Host` header
//! - [`key_generator`] - Reference key generation
//! - [`url_validator`] - Validation of submitted URLs

pub mod extract_domain;
pub mod key_generator;
pub mod url_validator;
