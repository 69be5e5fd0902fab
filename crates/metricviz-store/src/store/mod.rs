//! MetricsStore: catalog, selection, and per-metric lifecycle bookkeeping.
//!
//! All mutations are synchronous and either fully apply or fail before
//! touching state. The only suspension point is the catalog fetch
//! (see [`crate::loader`]).

mod shared;
mod snapshot;
mod transitions;

use std::collections::HashMap;

use metricviz_core::error::{MetricsError, Result};
use metricviz_core::model::{Action, MetricInfo, MetricState};

use crate::config::{DuplicatePolicy, StoreConfig};

pub use shared::SharedMetricsStore;
pub use snapshot::StoreSnapshot;
pub use transitions::is_allowed_transition;

/// Session-scoped metric state. Construct one per owning session and pass it
/// to whatever needs it.
#[derive(Debug, Default)]
pub struct MetricsStore {
    cfg: StoreConfig,
    catalog: Vec<String>,
    selected: Vec<String>,
    info: HashMap<String, MetricInfo>,
}

impl MetricsStore {
    /// Empty store with default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: StoreConfig) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.cfg
    }

    /// Append `name` to the selection and reset its info entry to `Added`.
    ///
    /// A name that is already selected is handled per
    /// [`DuplicatePolicy`]; with the default policy this is a no-op.
    pub fn select_metric(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();

        if self.is_selected(&name) {
            match self.cfg.selection.on_duplicate {
                DuplicatePolicy::Ignore => {
                    tracing::warn!(metric=%name, "metric already selected; ignoring");
                    return Ok(());
                }
                DuplicatePolicy::Reject => return Err(MetricsError::AlreadySelected(name)),
                DuplicatePolicy::Allow => {}
            }
        }

        tracing::debug!(metric=%name, "metric selected");
        self.info.insert(name.clone(), MetricInfo::added());
        self.selected.push(name);
        Ok(())
    }

    /// Remove the first occurrence of `name` from the selection and mark its
    /// entry `Removed`. The entry itself is kept, unit included.
    pub fn deselect_metric(&mut self, name: &str) -> Result<()> {
        let idx = self
            .selected
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| MetricsError::NotSelected(name.to_string()))?;

        let info = self.info.get_mut(name).ok_or_else(|| {
            MetricsError::Internal(format!("selected metric has no info entry: {name}"))
        })?;

        info.state = MetricState::Removed;
        self.selected.remove(idx);
        tracing::debug!(metric=%name, "metric deselected");
        Ok(())
    }

    /// Overwrite the lifecycle state of a tracked metric.
    ///
    /// Any state is reachable from any state unless
    /// `lifecycle.strict_transitions` is set.
    pub fn set_lifecycle_state(&mut self, name: &str, new_state: MetricState) -> Result<()> {
        let strict = self.cfg.lifecycle.strict_transitions;
        let info = self
            .info
            .get_mut(name)
            .ok_or_else(|| MetricsError::MetricNotTracked(name.to_string()))?;

        let from = info.state;
        if strict && !is_allowed_transition(from, new_state) {
            return Err(MetricsError::InvalidTransition {
                name: name.to_string(),
                from,
                to: new_state,
            });
        }

        info.state = new_state;
        tracing::debug!(metric=%name, %from, to=%new_state, "metric state changed");
        Ok(())
    }

    /// Overwrite the display unit of a tracked metric. State is untouched.
    pub fn set_unit(&mut self, name: &str, unit: impl Into<String>) -> Result<()> {
        let info = self
            .info
            .get_mut(name)
            .ok_or_else(|| MetricsError::MetricNotTracked(name.to_string()))?;
        info.unit = Some(unit.into());
        Ok(())
    }

    /// Replace the catalog wholesale, keeping the given order.
    pub fn replace_catalog(&mut self, names: Vec<String>) {
        tracing::debug!(count = names.len(), "catalog replaced");
        self.catalog = names;
    }

    /// Apply an [`Action`] with the same semantics as the direct call.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::trace!(action = action.name(), "dispatch");
        match action {
            Action::SelectMetric(name) => self.select_metric(name),
            Action::DeselectMetric(name) => self.deselect_metric(&name),
            Action::SetMetricState { metric, new_state } => {
                self.set_lifecycle_state(&metric, new_state)
            }
            Action::SetMetricUnit { metric, unit } => self.set_unit(&metric, unit),
            Action::SetCatalog(names) => {
                self.replace_catalog(names);
                Ok(())
            }
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Selected metrics in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn info(&self) -> &HashMap<String, MetricInfo> {
        &self.info
    }

    pub fn metric_info(&self, name: &str) -> Option<&MetricInfo> {
        self.info.get(name)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|m| m == name)
    }

    /// Owned copy of catalog, selection and info map.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            catalog: self.catalog.clone(),
            selected: self.selected.clone(),
            info: self
                .info
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}
