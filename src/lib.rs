//! PodView Backend Library
//!
//! Lists the pods of one Kubernetes namespace with their age and restart
//! totals, sorts them on request, counts them and exports the count as a
//! Prometheus gauge.

pub mod api;
pub mod config;
pub mod error;
pub mod k8s;
pub mod models;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api::AppState;

/// Create the application router with the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Pods
        .route("/pods", get(api::pods::list_pods))
        .route("/npods", get(api::pods::count_pods))
        // Metrics (Prometheus)
        .route("/metrics", get(api::metrics::metrics_handler))
        // OpenAPI
        .route("/api-docs/openapi.json", get(api::openapi::openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
