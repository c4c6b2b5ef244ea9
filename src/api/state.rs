use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;

/// Shared application state: the current catalog behind a swappable handle.
///
/// Requests clone the inner `Arc` out of the lock and read the catalog
/// without holding it. A reload builds a complete replacement catalog and
/// publishes it in one write; in-flight requests keep the catalog they
/// started with and never observe a partially built one.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Arc<Catalog>>>,
}

impl AppState {
    /// Creates the serving state around a fully loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Snapshot of the current catalog.
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    /// Atomically swaps in a freshly built catalog.
    pub async fn replace(&self, catalog: Catalog) {
        *self.catalog.write().await = Arc::new(catalog);
    }
}
