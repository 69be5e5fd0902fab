//! GraphQL catalog query and response decoding.
//!
//! The transport is owned by the host; this module only fixes the query
//! document and how a response body becomes a list of metric names.

use serde::Deserialize;

use crate::error::{MetricsError, Result};

/// Query document for the metric catalog.
pub const GET_METRICS_QUERY: &str = "query { getMetrics }";

/// `data` section of a `getMetrics` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetMetricsResponse {
    #[serde(rename = "getMetrics")]
    pub get_metrics: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    data: Option<GetMetricsResponse>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

/// Decode a GraphQL response body into catalog order.
///
/// Any entry in `errors` fails the whole response, even when `data` is
/// present; a partial catalog is never returned.
pub fn decode_get_metrics_response(body: &str) -> Result<Vec<String>> {
    let body: ResponseBody = serde_json::from_str(body).map_err(MetricsError::fetch_failed)?;

    if !body.errors.is_empty() {
        let msgs: Vec<&str> = body.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(MetricsError::fetch_failed(format!(
            "graphql errors: {}",
            msgs.join("; ")
        )));
    }

    body.data
        .map(|d| d.get_metrics)
        .ok_or_else(|| MetricsError::fetch_failed("graphql response missing data"))
}
