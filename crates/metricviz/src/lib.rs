//! Top-level facade crate for metricviz.
//!
//! Re-exports the core model and the store so users can depend on a single crate.

pub mod core {
    pub use metricviz_core::*;
}

pub mod store {
    pub use metricviz_store::*;
}
