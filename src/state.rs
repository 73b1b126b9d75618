use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::ProductStore;

/// Shared handles passed to every handler through axum `State`
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ProductStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: ProductStore, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
