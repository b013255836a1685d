//! Kubernetes client wrapper used as the live pod source

use anyhow::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{Api, ListParams},
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};
use tracing::{info, instrument, warn};

use super::source::PodSource;
use crate::error::AppResult;
use crate::models::PodRecord;

/// Wrapper around kube::Client that lists pods straight from the API server
#[derive(Clone)]
pub struct K8sClient {
    client: Client,
}

impl K8sClient {
    /// Create a new K8sClient using the default kubeconfig or in-cluster config
    #[instrument(skip_all)]
    pub async fn new() -> Result<Self> {
        let config = Config::infer().await?;
        Self::from_config(config)
    }

    /// Create a K8sClient from an explicit kubeconfig file
    #[instrument]
    pub async fn from_kubeconfig(path: &str) -> Result<Self> {
        let kubeconfig = Kubeconfig::read_from(path)?;
        let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let client = Client::try_from(config)?;
        info!("Connected to Kubernetes cluster");
        Ok(Self { client })
    }

    /// Get a typed API for pods in `namespace`
    pub fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Check if cluster is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let version = self.client.apiserver_version().await?;
        info!(version = %version.git_version, "Kubernetes cluster is healthy");
        Ok(true)
    }
}

#[async_trait]
impl PodSource for K8sClient {
    #[instrument(skip(self))]
    async fn list_pods(&self, namespace: &str) -> AppResult<Vec<PodRecord>> {
        let list = self
            .pods(namespace)
            .list(&ListParams::default())
            .await
            .map_err(|e| {
                warn!(namespace, error = %e, "Error retrieving list of pods");
                e
            })?;

        Ok(list.items.iter().map(PodRecord::from).collect())
    }
}
