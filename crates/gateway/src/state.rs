//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::service::RepoService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo_service: Arc<dyn RepoService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(repo_service: Arc<dyn RepoService>, config: GatewayConfig) -> Self {
        Self {
            repo_service,
            config,
        }
    }
}
