//! Handler for link deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::link::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// The row is removed from the database; the code may later be allocated
/// again like any unused code.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.link_service.remove(&code).await?;

    if !deleted {
        tracing::warn!(code = %code, "delete requested for unknown short code");
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    Ok(Json(DeleteResponse {
        message: "Link deleted".to_string(),
        short_code: code,
    }))
}
