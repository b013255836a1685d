//! OpenAPI documentation for the pod API

use axum::Json;
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PodView API",
        version = "0.1.0",
        description = "Pods of a single Kubernetes namespace: listing with age and restart totals, sorting, counting and a Prometheus pod-count gauge."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "pods", description = "Pod listing and counting"),
        (name = "metrics", description = "Prometheus exposition"),
        (name = "health", description = "Liveness")
    ),
    paths(
        crate::api::pods::list_pods,
        crate::api::pods::count_pods,
        crate::api::metrics::metrics_handler,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::PodView,
            crate::models::PodSortMethod,
            crate::models::PodSortDirection,
            crate::api::pods::CountErrorResponse,
            crate::api::health::HealthResponse,
            crate::error::ErrorMessage,
        )
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
