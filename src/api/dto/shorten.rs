//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS). Stored verbatim.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code (3-20 letters and digits).
    #[validate(length(min = 3, max = 20, message = "Custom code must be 3-20 characters"))]
    pub custom_code: Option<String>,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
}
