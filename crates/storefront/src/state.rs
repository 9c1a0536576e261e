//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::storage::{FileStorage, LocalStorage, MemoryStorage, StorageError};
use crate::store::Store;

/// Storage backend selected at startup.
pub type DynStorage = Box<dyn LocalStorage>;

/// Error building application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to open cart storage: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The store sits behind an
/// async mutex; a handler holds the guard for its whole mutation so events
/// never interleave.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Mutex<Store<DynStorage>>,
    catalog: Catalog,
}

impl AppState {
    /// Create application state from already-opened parts.
    #[must_use]
    pub fn new(storage: DynStorage, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Mutex::new(Store::open(storage)),
                catalog,
            }),
        }
    }

    /// Open storage and load the catalog as configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file is unreadable or the catalog
    /// file cannot be parsed.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, StateError> {
        let storage: DynStorage = match &config.storage_path {
            Some(path) => {
                let storage = FileStorage::open(path)?;
                tracing::info!(path = %storage.path().display(), "Using file-backed cart storage");
                Box::new(storage)
            }
            None => {
                tracing::info!("Using in-memory cart storage");
                Box::new(MemoryStorage::new())
            }
        };

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(),
        };
        tracing::info!(products = catalog.products().len(), "Catalog loaded");

        Ok(Self::new(storage, catalog))
    }

    /// Lock the cart/wishlist store.
    pub async fn store(&self) -> MutexGuard<'_, Store<DynStorage>> {
        self.inner.store.lock().await
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
