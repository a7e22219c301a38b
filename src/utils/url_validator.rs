//! Validation of URLs submitted for shortening.
//!
//! URLs are stored exactly as submitted, so this module only checks them and
//! never rewrites them.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must be absolute with a scheme and a host")]
    MissingHost,

    #[error("URL must not contain control characters or surrounding whitespace")]
    InvalidCharacters,
}

/// Parses `input` and checks that it is an absolute URL with a scheme and a host.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] when the URL does not parse and
/// [`UrlValidationError::MissingHost`] for host-less URLs such as `mailto:` links.
/// Returns [`UrlValidationError::InvalidCharacters`] for input with control
/// characters or leading/trailing whitespace. The parser silently strips
/// these, but the stored string must be usable as a `Location` header.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_absolute_url("https://example.com/a").is_ok());
/// assert!(validate_absolute_url("not-a-url").is_err());
/// assert!(validate_absolute_url("mailto:someone@example.com").is_err());
/// ```
pub fn validate_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.trim() != input || input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
