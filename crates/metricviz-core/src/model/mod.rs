//! Metric data model shared by the store and its consumers.

pub mod action;
pub mod catalog;

use serde::{Deserialize, Serialize};

pub use action::Action;
pub use catalog::{decode_get_metrics_response, GetMetricsResponse, GET_METRICS_QUERY};

/// Lifecycle of a selected metric.
///
/// Declaration order is the conventional progression
/// (`Added -> Initializing -> Initialized -> Plotted`); `Removed` is reached
/// by deselection or explicit override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricState {
    Added,
    Initializing,
    Initialized,
    Plotted,
    Removed,
}

impl MetricState {
    /// Next state along the forward progression, if any.
    pub fn successor(self) -> Option<MetricState> {
        match self {
            MetricState::Added => Some(MetricState::Initializing),
            MetricState::Initializing => Some(MetricState::Initialized),
            MetricState::Initialized => Some(MetricState::Plotted),
            MetricState::Plotted | MetricState::Removed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricState::Added => "Added",
            MetricState::Initializing => "Initializing",
            MetricState::Initialized => "Initialized",
            MetricState::Plotted => "Plotted",
            MetricState::Removed => "Removed",
        }
    }
}

impl std::fmt::Display for MetricState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-metric bookkeeping. Created at first selection and kept for the
/// lifetime of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricInfo {
    pub state: MetricState,
    /// Display unit; independent of `state`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricInfo {
    /// Fresh entry written on selection.
    pub fn added() -> Self {
        Self {
            state: MetricState::Added,
            unit: None,
        }
    }
}
