//! Store config: strict YAML, validated before any store sees it.

pub mod schema;

use std::path::Path;

use metricviz_core::error::{MetricsError, Result};

pub use schema::{DuplicatePolicy, LifecycleSection, SelectionSection, StoreConfig};

/// Read and validate a config file. I/O failures name the path.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<StoreConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        MetricsError::Internal(format!("read store config {}: {e}", path.display()))
    })?;
    let cfg = load_from_str(&text)?;
    tracing::debug!(
        path=%path.display(),
        on_duplicate=?cfg.selection.on_duplicate,
        strict_transitions = cfg.lifecycle.strict_transitions,
        "store config loaded"
    );
    Ok(cfg)
}

pub fn load_from_str(text: &str) -> Result<StoreConfig> {
    let cfg = serde_yaml::from_str::<StoreConfig>(text)
        .map_err(|e| MetricsError::BadConfig(format!("store config: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
