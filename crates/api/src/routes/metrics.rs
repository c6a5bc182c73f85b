//! Metrics endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{Value, json};

/// GET /metrics/prometheus: returns Prometheus-formatted metrics.
pub async fn prometheus(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        handle.render(),
    )
}

/// Builds the `{"total_<resource>": n, "service": name}` body served at
/// GET /metrics by each service.
pub fn count_body(resource: &str, total: usize, service: &str) -> Value {
    let mut body = json!({ "service": service });
    body[format!("total_{resource}")] = json!(total);
    body
}
