//! Action envelope (JSON).
//!
//! Each store mutation has a named action so user-interaction handlers can
//! forward intents as data:
//!
//! ```json
//! { "type": "set_metric_state", "payload": { "metric": "cpu", "newState": "Plotted" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::model::MetricState;

/// A store mutation expressed as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case", deny_unknown_fields)]
pub enum Action {
    /// Append to the selection and reset the metric's info entry.
    SelectMetric(String),
    /// Remove from the selection and mark the entry `Removed`.
    DeselectMetric(String),
    SetMetricState {
        metric: String,
        #[serde(rename = "newState")]
        new_state: MetricState,
    },
    SetMetricUnit { metric: String, unit: String },
    /// Replace the catalog wholesale.
    SetCatalog(Vec<String>),
}

impl Action {
    /// Strict decode of a JSON action envelope.
    pub fn parse(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| MetricsError::BadAction(format!("invalid action: {e}")))
    }

    /// Wire name of the action (value of the `type` field).
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectMetric(_) => "select_metric",
            Action::DeselectMetric(_) => "deselect_metric",
            Action::SetMetricState { .. } => "set_metric_state",
            Action::SetMetricUnit { .. } => "set_metric_unit",
            Action::SetCatalog(_) => "set_catalog",
        }
    }
}
