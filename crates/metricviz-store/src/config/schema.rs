use serde::Deserialize;
use metricviz_core::error::{MetricsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub version: u32,

    #[serde(default)]
    pub selection: SelectionSection,

    #[serde(default)]
    pub lifecycle: LifecycleSection,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            selection: SelectionSection::default(),
            lifecycle: LifecycleSection::default(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionSection {
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

/// What `select_metric` does with a name that is already selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Leave selection and info untouched.
    #[default]
    Ignore,
    /// Fail with `AlreadySelected`.
    Reject,
    /// Append the duplicate and reset the info entry.
    Allow,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifecycleSection {
    /// Enforce the forward transition table on `set_lifecycle_state`.
    #[serde(default)]
    pub strict_transitions: bool,
}
