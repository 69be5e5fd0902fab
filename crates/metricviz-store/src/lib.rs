//! metricviz store library entry.
//!
//! Wires the session-scoped [`MetricsStore`], its shared handle, the async
//! catalog loader, and the strict YAML config together. Consumed by host
//! applications and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod loader;
pub mod store;

pub use config::StoreConfig;
pub use loader::{CatalogSource, FnCatalogSource};
pub use store::{MetricsStore, SharedMetricsStore, StoreSnapshot};
