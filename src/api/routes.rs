//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, info_handler, redirect_handler, root_handler,
    shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET    /`             - Service status
/// - `GET    /health`       - Database health check
/// - `POST   /shorten`      - Create a short link
/// - `GET    /info/{code}`  - Stored record for a short link
/// - `GET    /{code}`       - Redirect to the original URL
/// - `DELETE /{code}`       - Delete a short link
///
/// Static segments take precedence over `/{code}`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/info/{code}", get(info_handler))
        .route("/{code}", get(redirect_handler).delete(delete_link_handler))
}
