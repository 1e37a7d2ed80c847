//! Public base URL derivation for building `short_url` values.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Returns the base URL short links are served from, without a trailing slash.
///
/// A configured `BASE_URL` wins. Otherwise the request's `Host` header is
/// used as-is (port included) with the `http` scheme.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and:
/// - The `Host` header is missing
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:3000".parse().unwrap());
///
/// assert_eq!(request_base_url(None, &headers).unwrap(), "http://localhost:3000");
/// assert_eq!(request_base_url(Some("https://s.test/"), &headers).unwrap(), "https://s.test");
/// ```
pub fn request_base_url(configured: Option<&str>, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    Ok(format!("http://{}", host.trim_end_matches('/')))
}

/// Joins a base URL and a short code into the public short URL.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}
