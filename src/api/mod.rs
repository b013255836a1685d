pub mod health;
pub mod metrics;
pub mod openapi;
pub mod pods;

use crate::config::Config;
use crate::k8s::{PodInventory, PodSource};

use self::metrics::PodMetrics;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pods: PodInventory,
    pub metrics: PodMetrics,
}

impl AppState {
    /// Build the state around exactly one pod source
    pub fn new(source: impl PodSource + 'static, config: Config) -> Self {
        Self {
            config,
            pods: PodInventory::new(source),
            metrics: PodMetrics::new(),
        }
    }

    /// The namespace every endpoint reports on
    pub fn namespace(&self) -> &str {
        &self.config.pod_namespace
    }
}
