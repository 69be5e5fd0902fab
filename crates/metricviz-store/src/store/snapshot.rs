use std::collections::BTreeMap;

use serde::Serialize;

use metricviz_core::error::{MetricsError, Result};
use metricviz_core::model::MetricInfo;

/// Owned view of the store for a rendering layer. `info` is ordered by name so
/// serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub catalog: Vec<String>,
    pub selected: Vec<String>,
    pub info: BTreeMap<String, MetricInfo>,
}

impl StoreSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| MetricsError::Internal(format!("snapshot encode failed: {e}")))
    }
}
