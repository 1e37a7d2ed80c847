//! Handler for link information endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::link::LinkInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "original_url": "https://example.com",
///   "short_code": "ic7bD0",
///   "created_at": "2026-01-15T10:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.stats(&code).await?.ok_or_else(|| {
        tracing::warn!(code = %code, "info requested for unknown short code");
        AppError::not_found("Short link not found", json!({ "code": code }))
    })?;

    Ok(Json(link.into()))
}
