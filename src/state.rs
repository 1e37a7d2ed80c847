use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    /// Public base for `short_url`; derived from the `Host` header when `None`.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteLinkRepository>>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
