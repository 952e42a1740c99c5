//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::data::AdminDataSource;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    data: Arc<dyn AdminDataSource>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminConfig, data: Arc<dyn AdminDataSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, data }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn data(&self) -> &dyn AdminDataSource {
        self.inner.data.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
