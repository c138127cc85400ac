use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::adapters::ResourceAdapter;
use crate::element::{parse_records, ConfigElement, ElementSet, Resource};
use crate::error::{Result, SyncError};
use ddbackup_http::{Downtime, DowntimesApi};

const KIND: &str = "downtimes";

/// Downtimes are named by their message
pub struct DowntimeAdapter {
    api: Arc<dyn DowntimesApi>,
}

impl DowntimeAdapter {
    pub fn new(api: Arc<dyn DowntimesApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceAdapter for DowntimeAdapter {
    fn name(&self) -> &'static str {
        KIND
    }

    fn decode_file(&self, source: &str) -> Result<Vec<ConfigElement>> {
        let records = parse_records::<Downtime>(source)
            .map_err(|source| SyncError::Decode { kind: KIND, source })?;

        Ok(records
            .into_iter()
            .map(|r| ConfigElement::new(r.name, r.id, Resource::Downtime(r.delegate)))
            .collect())
    }

    async fn get_all(&self) -> Result<ElementSet> {
        let downtimes = self.api.list_downtimes().await?;
        debug!(kind = KIND, "Listed {} downtimes", downtimes.len());

        let payloads = downtimes.iter().cloned().map(Resource::Downtime).collect();
        let elements = downtimes
            .into_iter()
            .map(|d| ConfigElement::new(d.message.clone(), d.id, Resource::Downtime(d)))
            .collect();

        Ok(ElementSet { elements, payloads })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Resource>> {
        Ok(self.api.get_downtime(id).await?.map(Resource::Downtime))
    }

    async fn get_by_name(&self, _name: &str) -> Result<Vec<Resource>> {
        Ok(Vec::new())
    }

    async fn create(&self, element: &ConfigElement) -> Result<Resource> {
        let Resource::Downtime(downtime) = element.delegate() else {
            return Err(SyncError::UnexpectedPayload {
                kind: KIND,
                found: element.delegate().kind(),
            });
        };

        let payload = Downtime {
            id: None,
            ..downtime.clone()
        };
        let created = self.api.create_downtime(&payload).await?;
        Ok(Resource::Downtime(created))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_downtime(id).await?;
        Ok(())
    }
}
