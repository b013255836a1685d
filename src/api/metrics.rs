use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};
use metrics::{describe_gauge, gauge, with_local_recorder};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};

use crate::api::AppState;

pub const POD_COUNT_GAUGE: &str = "pod_count";

/// Prometheus registry owned by the service rather than installed globally
#[derive(Clone)]
pub struct PodMetrics {
    recorder: Arc<PrometheusRecorder>,
}

impl PodMetrics {
    pub fn new() -> Self {
        Self {
            recorder: Arc::new(PrometheusBuilder::new().build_recorder()),
        }
    }

    /// Set the pod-count gauge for `namespace`; `None` (unknown) is exported as -1
    pub fn record_pod_count(&self, namespace: &str, count: Option<usize>) {
        let value = count.map_or(-1.0, |c| c as f64);
        let namespace = namespace.to_string();
        with_local_recorder(self.recorder.as_ref(), || {
            describe_gauge!(POD_COUNT_GAUGE, "Number of pods in the namespace");
            gauge!(POD_COUNT_GAUGE, "namespace" => namespace).set(value);
        });
    }

    /// Prometheus text exposition of everything recorded so far
    pub fn render(&self) -> String {
        self.recorder.handle().render()
    }
}

impl Default for PodMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Prometheus metrics endpoint
///
/// The pod count is re-read from the source on every scrape.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain")
    )
)]
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let namespace = state.namespace();
    let count = state.pods.count(namespace).await.ok();
    state.metrics.record_pod_count(namespace, count);

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics.render(),
    )
}
