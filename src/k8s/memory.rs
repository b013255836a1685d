//! In-memory pod source pre-loaded with synthetic pods

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;

use super::source::PodSource;
use crate::error::{AppError, AppResult};
use crate::models::PodRecord;

/// Pod source backed by a fixed list of `(namespace, Pod)` pairs.
///
/// Pods are converted with the same mapping the cluster client uses, so a
/// fake and a live cluster produce identical records for identical pods.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPodSource {
    pods: Vec<(String, Pod)>,
    failure: Option<String>,
}

impl InMemoryPodSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pod to `namespace`; insertion order is the listing order
    pub fn with_pod(mut self, namespace: &str, pod: Pod) -> Self {
        self.pods.push((namespace.to_string(), pod));
        self
    }

    pub fn with_pods(mut self, namespace: &str, pods: impl IntoIterator<Item = Pod>) -> Self {
        self.pods
            .extend(pods.into_iter().map(|pod| (namespace.to_string(), pod)));
        self
    }

    /// Make every listing fail with `message`
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl PodSource for InMemoryPodSource {
    async fn list_pods(&self, namespace: &str) -> AppResult<Vec<PodRecord>> {
        if let Some(message) = &self.failure {
            return Err(AppError::source_unavailable(message));
        }

        Ok(self
            .pods
            .iter()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, pod)| PodRecord::from(pod))
            .collect())
    }
}
