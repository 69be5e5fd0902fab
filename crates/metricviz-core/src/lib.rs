//! metricviz core: the data model, action envelope, and error surface shared
//! by the store and its hosts.
//!
//! This crate carries no runtime dependencies so the model can be reused by a
//! rendering layer without pulling in the store.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `MetricsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{ErrorCode, MetricsError, Result};
pub use model::{Action, MetricInfo, MetricState};
