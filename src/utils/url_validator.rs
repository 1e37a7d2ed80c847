//! Validation of URLs submitted for shortening.
//!
//! URLs are stored verbatim, so the raw string itself must be usable as a
//! redirect target. `Url::parse` silently strips tabs, newlines and
//! surrounding spaces; those are rejected here before parsing.

use url::Url;

use crate::domain::errors::ShortenError;

/// Checks that `raw` is a non-empty absolute `http` or `https` URL with no
/// whitespace or control characters.
///
/// # Errors
///
/// Returns [`ShortenError::InvalidUrl`] describing the first rule violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_original_url("https://example.com/a?b=c").is_ok());
/// assert!(validate_original_url("ftp://example.com").is_err());
/// assert!(validate_original_url("https://example.com/a\nb").is_err());
/// ```
pub fn validate_original_url(raw: &str) -> Result<(), ShortenError> {
    if raw.is_empty() {
        return Err(invalid(raw, "URL must not be empty"));
    }

    if raw.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(invalid(
            raw,
            "URL must not contain whitespace or control characters",
        ));
    }

    let parsed = Url::parse(raw).map_err(|e| invalid(raw, e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid(raw, "URL must start with http:// or https://")),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid(raw, "URL must have a host"));
    }

    Ok(())
}

fn invalid(url: &str, reason: impl Into<String>) -> ShortenError {
    ShortenError::InvalidUrl {
        url: url.to_string(),
        reason: reason.into(),
    }
}
