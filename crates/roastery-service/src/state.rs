//! Application state.

use std::sync::Arc;

use roastery_store::{MemoryStore, Store};

use crate::config::{ServiceConfig, StoreBackend};
use crate::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend, if one could be opened.
    pub store: Option<Arc<dyn Store>>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Option<Arc<dyn Store>>, config: ServiceConfig) -> Self {
        if store.is_none() {
            tracing::warn!("No document store - data endpoints will answer 503");
        }
        Self { store, config }
    }

    /// Open the configured backend and build the state around it.
    ///
    /// A backend that fails to open is logged and left out, so the service
    /// still starts and reports the store as unavailable.
    #[must_use]
    pub fn from_config(config: ServiceConfig) -> Self {
        let store = open_store(&config);
        Self::new(store, config)
    }

    /// The store handle.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::StoreUnavailable` if no store is configured.
    pub fn store(&self) -> Result<&dyn Store, ApiError> {
        self.store
            .as_deref()
            .ok_or_else(|| ApiError::StoreUnavailable("document store not initialized".into()))
    }

    /// Check if a store is configured.
    #[must_use]
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }
}

fn open_store(config: &ServiceConfig) -> Option<Arc<dyn Store>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
            Some(store)
        }
        StoreBackend::Disabled => None,
        StoreBackend::RocksDb => open_rocks(&config.data_dir),
    }
}

#[cfg(feature = "rocksdb-backend")]
fn open_rocks(data_dir: &str) -> Option<Arc<dyn Store>> {
    tracing::info!(path = %data_dir, "Opening RocksDB store");
    match roastery_store::RocksStore::open(data_dir) {
        Ok(store) => {
            let store: Arc<dyn Store> = Arc::new(store);
            Some(store)
        }
        Err(e) => {
            tracing::error!(path = %data_dir, error = %e, "Failed to open RocksDB store");
            None
        }
    }
}

#[cfg(not(feature = "rocksdb-backend"))]
fn open_rocks(data_dir: &str) -> Option<Arc<dyn Store>> {
    tracing::error!(
        path = %data_dir,
        "RocksDB backend requested but not compiled in (enable the rocksdb-backend feature)"
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(store_backend: StoreBackend) -> ServiceConfig {
        ServiceConfig {
            store_backend,
            ..ServiceConfig::default()
        }
    }

    #[test]
    fn memory_backend_is_available() {
        let state = AppState::from_config(config(StoreBackend::Memory));
        assert!(state.has_store());
        assert!(state.store().is_ok());
    }

    #[test]
    fn disabled_backend_is_unavailable() {
        let state = AppState::from_config(config(StoreBackend::Disabled));
        assert!(matches!(state.store(), Err(ApiError::StoreUnavailable(_))));
    }

    #[cfg(feature = "rocksdb-backend")]
    #[test]
    fn rocksdb_backend_opens_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = AppState::from_config(ServiceConfig {
            store_backend: StoreBackend::RocksDb,
            data_dir: dir.path().to_string_lossy().to_string(),
            ..ServiceConfig::default()
        });
        assert!(state.has_store());
    }

    #[cfg(not(feature = "rocksdb-backend"))]
    #[test]
    fn rocksdb_backend_without_feature_is_unavailable() {
        let state = AppState::from_config(config(StoreBackend::RocksDb));
        assert!(!state.has_store());
    }
}
