//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// storage handle and configuration. The handle is constructed once in
/// `main` and injected here; nothing reads it from module scope.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    database: Database,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `database` - Handle to the `cc-ecommerce-db` database
    #[must_use]
    pub fn new(config: ApiConfig, database: Database) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, database }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.inner.database
    }
}
