//! Reference key generation.

use uuid::Uuid;

/// Generates a new reference key.
///
/// Keys are random (version 4) UUIDs in their canonical hyphenated,
/// lowercase form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
pub fn generate_reference_key() -> String {
    Uuid::new_v4().to_string()
}
