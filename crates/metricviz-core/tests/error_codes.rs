#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::error::Error as _;

use metricviz_core::error::{ErrorCode, MetricsError};
use metricviz_core::model::{MetricInfo, MetricState};

#[test]
fn codes_are_stable() {
    let cases = [
        (MetricsError::NotSelected("cpu".into()), "NOT_SELECTED"),
        (MetricsError::MetricNotTracked("cpu".into()), "METRIC_NOT_TRACKED"),
        (MetricsError::fetch_failed("boom"), "CATALOG_FETCH_FAILED"),
        (MetricsError::AlreadySelected("cpu".into()), "ALREADY_SELECTED"),
        (
            MetricsError::InvalidTransition {
                name: "cpu".into(),
                from: MetricState::Added,
                to: MetricState::Plotted,
            },
            "INVALID_TRANSITION",
        ),
        (MetricsError::UnsupportedVersion, "UNSUPPORTED_VERSION"),
    ];
    for (err, code) in cases {
        assert_eq!(err.code().as_str(), code, "err={err}");
    }
}

#[test]
fn fetch_failure_keeps_cause_text() {
    let err = MetricsError::fetch_failed("connection refused");
    assert_eq!(err.code(), ErrorCode::CatalogFetchFailed);
    assert_eq!(err.to_string(), "catalog fetch failed");
    let cause = err.source().expect("cause kept");
    assert_eq!(cause.to_string(), "connection refused");
}

#[test]
fn lifecycle_progression() {
    assert!(MetricState::Added < MetricState::Initializing);
    assert!(MetricState::Plotted < MetricState::Removed);
    assert_eq!(MetricState::Added.successor(), Some(MetricState::Initializing));
    assert_eq!(MetricState::Initialized.successor(), Some(MetricState::Plotted));
    assert_eq!(MetricState::Plotted.successor(), None);
    assert_eq!(MetricState::Removed.successor(), None);
}

#[test]
fn info_json_omits_missing_unit() {
    let v = serde_json::to_value(MetricInfo::added()).unwrap();
    assert_eq!(v, serde_json::json!({ "state": "Added" }));
}
