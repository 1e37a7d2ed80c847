//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// `original_url` and `short_code` never change after insert; a link is only
/// ever created or hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new link.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
}

impl NewLink {
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}
