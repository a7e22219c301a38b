//! DTOs for domain usage statistics.

use serde::Serialize;

use crate::domain::entities::DomainCount;

/// One entry of `GET /domain-counts`.
#[derive(Debug, Serialize)]
pub struct DomainCountItem {
    pub domain: String,
    pub count: i64,
}

impl From<DomainCount> for DomainCountItem {
    fn from(d: DomainCount) -> Self {
        Self {
            domain: d.domain_name,
            count: d.count,
        }
    }
}
