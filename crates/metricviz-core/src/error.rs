//! Shared error type across metricviz crates.

use thiserror::Error;

use crate::model::MetricState;

/// Boxed cause carried by [`MetricsError::CatalogFetchFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stable error codes, distinguishable by kind regardless of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Deselect requested for a metric that is not selected.
    NotSelected,
    /// State/unit update for a metric that was never selected.
    MetricNotTracked,
    /// The injected catalog fetch failed.
    CatalogFetchFailed,
    /// Selection rejected because the metric is already selected.
    AlreadySelected,
    /// Lifecycle move refused by the strict transition table.
    InvalidTransition,
    /// Malformed action envelope.
    BadAction,
    /// Invalid store configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// I/O failure or poisoned store lock.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and serialized errors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotSelected => "NOT_SELECTED",
            ErrorCode::MetricNotTracked => "METRIC_NOT_TRACKED",
            ErrorCode::CatalogFetchFailed => "CATALOG_FETCH_FAILED",
            ErrorCode::AlreadySelected => "ALREADY_SELECTED",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::BadAction => "BAD_ACTION",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and store.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metric not selected: {0}")]
    NotSelected(String),
    #[error("metric not tracked: {0}")]
    MetricNotTracked(String),
    #[error("catalog fetch failed")]
    CatalogFetchFailed(#[source] BoxError),
    #[error("metric already selected: {0}")]
    AlreadySelected(String),
    #[error("invalid transition for {name}: {from:?} -> {to:?}")]
    InvalidTransition {
        name: String,
        from: MetricState,
        to: MetricState,
    },
    #[error("bad action: {0}")]
    BadAction(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricsError::NotSelected(_) => ErrorCode::NotSelected,
            MetricsError::MetricNotTracked(_) => ErrorCode::MetricNotTracked,
            MetricsError::CatalogFetchFailed(_) => ErrorCode::CatalogFetchFailed,
            MetricsError::AlreadySelected(_) => ErrorCode::AlreadySelected,
            MetricsError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            MetricsError::BadAction(_) => ErrorCode::BadAction,
            MetricsError::BadConfig(_) => ErrorCode::BadConfig,
            MetricsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            MetricsError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Wrap a collaborator failure as [`MetricsError::CatalogFetchFailed`].
    pub fn fetch_failed<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        MetricsError::CatalogFetchFailed(cause.into())
    }
}
