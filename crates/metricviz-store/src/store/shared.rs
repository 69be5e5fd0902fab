use std::sync::{Arc, Mutex};

use metricviz_core::error::{MetricsError, Result};
use metricviz_core::model::Action;

use crate::loader::{fetch_catalog, CatalogSource};
use crate::store::{MetricsStore, StoreSnapshot};

/// Cloneable handle for hosts that reach the store from several tasks.
///
/// Critical sections never await. Catalog loads fetch without holding the
/// lock, so concurrent loads resolve independently and the last successful
/// one wins.
#[derive(Clone, Default)]
pub struct SharedMetricsStore {
    inner: Arc<Mutex<MetricsStore>>,
}

impl SharedMetricsStore {
    pub fn new(store: MetricsStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut MetricsStore) -> R) -> Result<R> {
        // Poisoned mutex means a panic mid-mutation; report instead of propagating it.
        let mut g = self
            .inner
            .lock()
            .map_err(|_| MetricsError::Internal("metrics store lock poisoned".into()))?;
        Ok(f(&mut *g))
    }

    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.with(|s| s.dispatch(action))?
    }

    pub fn snapshot(&self) -> Result<StoreSnapshot> {
        self.with(|s| s.snapshot())
    }

    /// Fetch the catalog, then install it. On failure the catalog is left as is.
    pub async fn load_catalog(&self, source: &dyn CatalogSource) -> Result<()> {
        let names = fetch_catalog(source).await?;
        self.with(|s| s.replace_catalog(names))
    }
}
