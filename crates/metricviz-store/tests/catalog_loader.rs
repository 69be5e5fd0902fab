//! Async catalog loading through an injected source.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::error::Error as _;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use metricviz_core::error::{ErrorCode, MetricsError, Result};
use metricviz_core::model::decode_get_metrics_response;
use metricviz_store::{CatalogSource, FnCatalogSource, MetricsStore, SharedMetricsStore};

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

/// Counts calls and returns a fixed outcome.
struct CountingSource {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingSource {
    fn new(fail: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail,
        }
    }
}

#[async_trait]
impl CatalogSource for CountingSource {
    async fn fetch_metric_names(&self) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(MetricsError::fetch_failed("connection refused"))
        } else {
            Ok(names(&["cpu", "mem", "disk"]))
        }
    }
}

/// Resolves when the test sends on the paired channel.
struct GatedSource {
    rx: Mutex<Option<oneshot::Receiver<Result<Vec<String>>>>>,
}

impl GatedSource {
    fn new() -> (Self, oneshot::Sender<Result<Vec<String>>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                rx: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl CatalogSource for GatedSource {
    async fn fetch_metric_names(&self) -> Result<Vec<String>> {
        let rx = self.rx.lock().unwrap().take().expect("fetched twice");
        rx.await
            .map_err(|_| MetricsError::fetch_failed("gate dropped"))?
    }
}

#[tokio::test]
async fn load_installs_catalog_in_order() {
    let mut s = MetricsStore::new();
    let src = CountingSource::new(false);
    s.load_catalog(&src).await.unwrap();
    assert_eq!(s.catalog(), ["cpu", "mem", "disk"]);
    assert_eq!(src.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_load_keeps_previous_catalog() {
    let mut s = MetricsStore::new();
    s.replace_catalog(names(&["old"]));

    let src = CountingSource::new(true);
    let err = s.load_catalog(&src).await.expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::CatalogFetchFailed);
    assert_eq!(err.source().expect("cause kept").to_string(), "connection refused");
    assert_eq!(s.catalog(), ["old"]);
    assert_eq!(src.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn other_source_errors_are_wrapped() {
    let mut s = MetricsStore::new();
    let src = FnCatalogSource::new(|| async {
        Err::<Vec<String>, _>(MetricsError::Internal("transport closed".into()))
    });
    let err = s.load_catalog(&src).await.expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::CatalogFetchFailed);
    assert!(s.catalog().is_empty());
}

#[tokio::test]
async fn fn_source_from_graphql_body() {
    let mut s = MetricsStore::new();
    let src = FnCatalogSource::new(|| async {
        decode_get_metrics_response(r#"{ "data": { "getMetrics": ["gpu", "cpu"] } }"#)
    });
    s.load_catalog(&src).await.unwrap();
    assert_eq!(s.catalog(), ["gpu", "cpu"]);
}

#[tokio::test]
async fn load_does_not_touch_selection() {
    let mut s = MetricsStore::new();
    s.select_metric("net").unwrap();
    s.load_catalog(&CountingSource::new(false)).await.unwrap();
    assert_eq!(s.selected(), ["net"]);
    assert!(s.info().contains_key("net"));
}

#[tokio::test]
async fn concurrent_loads_last_resolution_wins() {
    let shared = SharedMetricsStore::default();
    let (first, first_tx) = GatedSource::new();
    let (second, second_tx) = GatedSource::new();

    let s1 = shared.clone();
    let s2 = shared.clone();
    let h1 = tokio::spawn(async move { s1.load_catalog(&first).await });
    let h2 = tokio::spawn(async move { s2.load_catalog(&second).await });

    // second request resolves first, first request resolves last
    second_tx.send(Ok(names(&["b"]))).unwrap();
    h2.await.unwrap().unwrap();
    assert_eq!(shared.snapshot().unwrap().catalog, ["b"]);

    first_tx.send(Ok(names(&["a"]))).unwrap();
    h1.await.unwrap().unwrap();
    assert_eq!(shared.snapshot().unwrap().catalog, ["a"]);
}

#[tokio::test]
async fn concurrent_failure_does_not_clobber() {
    let shared = SharedMetricsStore::default();
    let (ok_src, ok_tx) = GatedSource::new();
    let (bad_src, bad_tx) = GatedSource::new();

    let fut_ok = shared.load_catalog(&ok_src);
    let fut_bad = shared.load_catalog(&bad_src);
    ok_tx.send(Ok(names(&["cpu"]))).unwrap();
    bad_tx
        .send(Err(MetricsError::fetch_failed("timeout")))
        .unwrap();

    let (r_ok, r_bad) = futures_util::future::join(fut_ok, fut_bad).await;
    r_ok.unwrap();
    assert_eq!(r_bad.expect_err("must fail").code(), ErrorCode::CatalogFetchFailed);
    assert_eq!(shared.snapshot().unwrap().catalog, ["cpu"]);
}

#[tokio::test]
async fn shared_handle_sees_dispatches() {
    let shared = SharedMetricsStore::new(MetricsStore::new());
    let other = shared.clone();
    shared
        .dispatch(metricviz_core::model::Action::SelectMetric("cpu".into()))
        .unwrap();
    let selected = other.with(|s| s.selected().to_vec()).unwrap();
    assert_eq!(selected, ["cpu"]);

    let err = other
        .dispatch(metricviz_core::model::Action::DeselectMetric("mem".into()))
        .expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::NotSelected);
}

#[tokio::test]
async fn poisoned_lock_reports_internal() {
    let shared = SharedMetricsStore::default();
    let handle = shared.clone();
    let res = catch_unwind(AssertUnwindSafe(|| {
        handle.with(|_| -> Result<()> { panic!("mutation aborted") })
    }));
    assert!(res.is_err());

    let err = shared
        .dispatch(metricviz_core::model::Action::SelectMetric("cpu".into()))
        .expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Internal);

    let err = shared.snapshot().expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Internal);

    let src = CountingSource::new(false);
    let err = shared.load_catalog(&src).await.expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::Internal);
    assert_eq!(src.calls.load(Ordering::SeqCst), 1);
}
