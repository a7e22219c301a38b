//! Per-domain usage counter entity.

/// Number of URLs shortened for a single domain.
///
/// `domain_name` is the URL hostname with a leading `www.` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain_name: String,
    pub count: i64,
}

impl DomainCount {
    pub fn new(domain_name: String, count: i64) -> Self {
        Self { domain_name, count }
    }
}
