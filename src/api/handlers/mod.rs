//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod domain_counts;
pub mod health;
pub mod legacy;
pub mod resolve;
pub mod shorten;

pub use domain_counts::domain_counts_handler;
pub use health::health_handler;
pub use legacy::{legacy_resolve_handler, legacy_shorten_handler, legacy_test_handler};
pub use resolve::{missing_key_handler, resolve_handler};
pub use shorten::shorten_handler;
