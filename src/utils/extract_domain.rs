//! Domain extraction from submitted URLs and from request headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;
use url::Url;

/// Extracts the counting domain of a URL.
///
/// The domain is the URL's hostname with a single leading `www.` removed.
/// IPv6 literals are returned without their brackets.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL does not parse or has no host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_domain_from_url("https://www.example.com/a").unwrap(), "example.com");
/// assert_eq!(extract_domain_from_url("http://api.example.com:8080").unwrap(), "api.example.com");
/// ```
pub fn extract_domain_from_url(raw_url: &str) -> Result<String, AppError> {
    let url = Url::parse(raw_url).map_err(|e| {
        AppError::bad_request(
            "Invalid URL",
            json!({ "url": raw_url, "reason": e.to_string() }),
        )
    })?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::bad_request("URL has no host", json!({ "url": raw_url })))?;

    let host = host.trim_start_matches('[').trim_end_matches(']');
    let domain = host.strip_prefix("www.").unwrap_or(host);

    Ok(domain.to_string())
}

/// Returns the authority the client addressed, port included.
///
/// Reads the `Host` header; HTTP/2 requests that carry only `:authority`
/// fall back to the authority of the request URI.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither the `Host` header nor the URI carries an authority
/// - The header value contains invalid UTF-8
pub fn extract_request_host(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    if let Some(value) = headers.get(header::HOST) {
        let host = value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim();

        if !host.is_empty() {
            return Ok(host.to_string());
        }
    }

    match (uri.host(), uri.port_u16()) {
        (Some(host), Some(port)) if !host.is_empty() => Ok(format!("{}:{}", host, port)),
        (Some(host), None) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(AppError::bad_request("Missing Host header", json!({}))),
    }
}
