//! DTOs for link lookup and deletion endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Full stored record of a short link.
#[derive(Debug, Serialize)]
pub struct LinkInfoResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkInfoResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: link.created_at,
        }
    }
}

/// Confirmation returned after a link is deleted.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub short_code: String,
}
