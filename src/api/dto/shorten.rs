//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. A missing field deserializes to an empty string
    /// and fails validation, so both cases answer 400.
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing 'url'"))]
    pub url: String,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortenUrl")]
    pub shorten_url: String,
}
