//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::repositories::{ClickRepository, UrlRepository};

/// Application state holding the service layer.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wires services over the given storage backend.
    pub fn new(
        urls: Arc<dyn UrlRepository>,
        clicks: Arc<dyn ClickRepository>,
        base_url: String,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(urls.clone(), clicks, base_url)),
            stats_service: Arc::new(StatsService::new(urls)),
        }
    }
}
