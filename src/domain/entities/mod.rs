//! Core domain entities.
//!
//! - [`UrlMapping`] - A reference key and the URL it stands for
//! - [`DomainCount`] - How many URLs have been shortened for a domain
//!
//! Creation inputs use separate structs (`NewUrlMapping`), following the same
//! "new type for inserts" pattern as the persisted entities.

pub mod domain_count;
pub mod url_mapping;

pub use domain_count::DomainCount;
pub use url_mapping::{MappingOutcome, NewUrlMapping, UrlMapping};
