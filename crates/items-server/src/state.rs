//! Application state shared across handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use items_store::ItemService;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Item operations over the injected store.
    service: ItemService,
    /// Server configuration.
    config: Arc<ServerConfig>,
    /// When the process started serving.
    started_at: Instant,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: ItemService, config: ServerConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// State over an empty in-memory store with default configuration.
    pub fn in_memory() -> Self {
        Self::new(ItemService::in_memory(), ServerConfig::default())
    }

    /// Get a reference to the item service.
    pub fn service(&self) -> &ItemService {
        &self.service
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Time elapsed since the state was created.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
