//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns 307 Temporary Redirect to the stored URL.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .link_service
        .resolve(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

    debug!(code = %code, "redirecting");

    Ok(Redirect::temporary(&original_url))
}
