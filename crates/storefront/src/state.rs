//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::middleware::SessionLocks;
use crate::stores::{Catalog, CustomerStore, StoreError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog and customer
/// stores are read-only after construction.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    customers: CustomerStore,
    session_locks: SessionLocks,
}

impl AppState {
    /// Create application state from already-loaded stores.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, customers: CustomerStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                customers,
                session_locks: SessionLocks::new(),
            }),
        }
    }

    /// Load both stores from the files named in `config`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if either file is missing or malformed.
    pub fn load(config: StorefrontConfig) -> Result<Self, StoreError> {
        let catalog = Catalog::load(&config.melons_file)?;
        let customers = CustomerStore::load(&config.customers_file)?;
        Ok(Self::new(config, catalog, customers))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the melon catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the customer store.
    #[must_use]
    pub fn customers(&self) -> &CustomerStore {
        &self.inner.customers
    }

    /// Get a reference to the per-session request locks.
    #[must_use]
    pub fn session_locks(&self) -> &SessionLocks {
        &self.inner.session_locks
    }
}
