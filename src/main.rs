use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podview_backend::{api::AppState, config::Config, create_router, k8s::K8sClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(namespace = %config.pod_namespace, "Starting PodView Backend");

    // Connect to the cluster
    let k8s = match &config.kubeconfig_path {
        Some(path) => K8sClient::from_kubeconfig(path).await?,
        None => K8sClient::new().await?,
    };
    if let Err(e) = k8s.health_check().await {
        // Requests will report the failure; the server still starts
        tracing::warn!("Kubernetes cluster not reachable yet: {}", e);
    }

    // Build application state
    let addr = config.listen_addr();
    let state = AppState::new(k8s, config);

    // Build router
    let app = create_router(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
