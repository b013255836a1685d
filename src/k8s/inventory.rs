//! Pod views and pod counts for a namespace

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use super::source::PodSource;
use crate::error::AppResult;
use crate::models::{PodRecord, PodView};

/// Builds pod views and counts on top of a single pod source.
///
/// Nothing is cached between calls; every request re-queries the source.
#[derive(Clone)]
pub struct PodInventory {
    source: Arc<dyn PodSource>,
}

impl PodInventory {
    pub fn new(source: impl PodSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Views for every pod in `namespace`, aged against the current time
    pub async fn list_views(&self, namespace: &str) -> AppResult<Vec<PodView>> {
        self.list_views_at(namespace, Utc::now()).await
    }

    /// Views for every pod in `namespace`, aged against `now`.
    ///
    /// The order is the order reported by the source.
    #[instrument(skip(self))]
    pub async fn list_views_at(
        &self,
        namespace: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<PodView>> {
        let records = self.records(namespace).await?;
        debug!(namespace, count = records.len(), "Listed pods");

        Ok(records
            .iter()
            .map(|record| PodView::from_record(record, now))
            .collect())
    }

    /// Number of pods currently in `namespace`
    #[instrument(skip(self))]
    pub async fn count(&self, namespace: &str) -> AppResult<usize> {
        Ok(self.records(namespace).await?.len())
    }

    async fn records(&self, namespace: &str) -> AppResult<Vec<PodRecord>> {
        self.source.list_pods(namespace).await.map_err(|e| {
            warn!(namespace, error = %e, "Pod source unavailable");
            e
        })
    }
}
