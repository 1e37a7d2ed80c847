//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_base::{request_base_url, short_url};

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "mycode"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:3000/ic7bD0",
///   "original_url": "https://example.com",
///   "short_code": "ic7bD0"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL or custom code is invalid, or the URL
///   contains whitespace or control characters
/// - 409 Conflict if the custom code is already taken
/// - 500 Internal Server Error if no unique code could be allocated
/// - 503 Service Unavailable if the database cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let base = request_base_url(state.base_url.as_deref(), &headers)?;

    let link = state
        .link_service
        .create(&payload.url, payload.custom_code.as_deref())
        .await?;

    tracing::info!(code = %link.short_code, url = %link.original_url, "short link issued");

    Ok(Json(ShortenResponse {
        short_url: short_url(&base, &link.short_code),
        original_url: link.original_url,
        short_code: link.short_code,
    }))
}
