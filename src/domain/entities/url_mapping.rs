//! URL mapping entity.

/// A stored mapping between an original URL and its reference key.
///
/// Mappings are created once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub actual_url: String,
    pub reference_key: String,
}

impl UrlMapping {
    pub fn new(actual_url: String, reference_key: String) -> Self {
        Self {
            actual_url,
            reference_key,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub actual_url: String,
    pub reference_key: String,
}

/// Result of a shorten or insert-or-fetch operation.
///
/// `is_new` is `true` only for the request whose insert created the row.
#[derive(Debug, Clone)]
pub struct MappingOutcome {
    pub mapping: UrlMapping,
    pub is_new: bool,
}

impl MappingOutcome {
    pub fn created(mapping: UrlMapping) -> Self {
        Self {
            mapping,
            is_new: true,
        }
    }

    pub fn existing(mapping: UrlMapping) -> Self {
        Self {
            mapping,
            is_new: false,
        }
    }

    pub fn reference_key(&self) -> &str {
        &self.mapping.reference_key
    }
}
