//! Catalog loader: the single async boundary of the store.
//!
//! The fetch collaborator is injected as a [`CatalogSource`]. The loader calls
//! it exactly once per load and installs the result with
//! [`MetricsStore::replace_catalog`]. A failed fetch never touches the
//! catalog. There is no retry, de-duplication, or cancellation here.

use std::future::Future;

use async_trait::async_trait;

use metricviz_core::error::{MetricsError, Result};

use crate::store::MetricsStore;

/// Capability that yields the current metric names, in catalog order.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_metric_names(&self) -> Result<Vec<String>>;
}

/// Adapts a plain async function into a [`CatalogSource`].
pub struct FnCatalogSource<F> {
    f: F,
}

impl<F> FnCatalogSource<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> CatalogSource for FnCatalogSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<String>>> + Send + 'static,
{
    async fn fetch_metric_names(&self) -> Result<Vec<String>> {
        (self.f)().await
    }
}

/// Call the source once. Failures come back as `CatalogFetchFailed`; a source
/// that already reports that kind is forwarded untouched.
pub(crate) async fn fetch_catalog(source: &dyn CatalogSource) -> Result<Vec<String>> {
    match source.fetch_metric_names().await {
        Ok(names) => {
            tracing::debug!(count = names.len(), "catalog fetched");
            Ok(names)
        }
        Err(e) => {
            tracing::warn!(error=?e, "catalog fetch failed");
            match e {
                MetricsError::CatalogFetchFailed(_) => Err(e),
                other => Err(MetricsError::fetch_failed(other)),
            }
        }
    }
}

impl MetricsStore {
    /// Fetch the catalog from `source` and replace the current one.
    ///
    /// Borrows the store for the duration of the fetch; hosts that need
    /// overlapping loads use [`crate::store::SharedMetricsStore::load_catalog`].
    pub async fn load_catalog(&mut self, source: &dyn CatalogSource) -> Result<()> {
        let names = fetch_catalog(source).await?;
        self.replace_catalog(names);
        Ok(())
    }
}
