//! Pod sources: anything that can list the pods of a namespace

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;

use crate::error::AppResult;
use crate::models::PodRecord;

/// Lists the pods currently present in a namespace.
///
/// Implementations must not cache: every call reflects the source at the
/// time of the call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PodSource: Send + Sync {
    /// Pods of `namespace`, in the order the source reports them
    async fn list_pods(&self, namespace: &str) -> AppResult<Vec<PodRecord>>;
}

impl From<&Pod> for PodRecord {
    fn from(pod: &Pod) -> Self {
        let created_at = pod
            .metadata
            .creation_timestamp
            .as_ref()
            .map(|t| t.0)
            .unwrap_or_default();

        let restart_counts = pod
            .status
            .as_ref()
            .and_then(|s| s.container_statuses.as_ref())
            .map(|statuses| {
                statuses
                    .iter()
                    .map(|cs| u32::try_from(cs.restart_count).unwrap_or(0))
                    .collect()
            })
            .unwrap_or_default();

        PodRecord {
            name: pod.metadata.name.clone().unwrap_or_default(),
            created_at,
            restart_counts,
        }
    }
}
