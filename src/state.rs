//! Shared state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Application state constructed once in [`crate::server::run`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    /// Prefix for generated short URLs, e.g. `http://127.0.0.1:5023`.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<SqliteLinkRepository>>, base_url: &str) -> Self {
        Self {
            link_service,
            base_url: Arc::from(base_url),
        }
    }
}
