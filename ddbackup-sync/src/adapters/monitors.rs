use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::adapters::ResourceAdapter;
use crate::element::{parse_records, ConfigElement, ElementSet, Resource};
use crate::error::{Result, SyncError};
use ddbackup_http::{Monitor, MonitorsApi};

const KIND: &str = "monitors";

pub struct MonitorAdapter {
    api: Arc<dyn MonitorsApi>,
}

impl MonitorAdapter {
    pub fn new(api: Arc<dyn MonitorsApi>) -> Self {
        Self { api }
    }

    fn wrap(monitor: Monitor) -> ConfigElement {
        ConfigElement::new(monitor.name.clone(), monitor.id, Resource::Monitor(monitor))
    }
}

#[async_trait]
impl ResourceAdapter for MonitorAdapter {
    fn name(&self) -> &'static str {
        KIND
    }

    fn decode_file(&self, source: &str) -> Result<Vec<ConfigElement>> {
        let records = parse_records::<Monitor>(source)
            .map_err(|source| SyncError::Decode { kind: KIND, source })?;

        Ok(records
            .into_iter()
            .map(|r| ConfigElement::new(r.name, r.id, Resource::Monitor(r.delegate)))
            .collect())
    }

    async fn get_all(&self) -> Result<ElementSet> {
        let monitors = self.api.list_monitors().await?;
        debug!(kind = KIND, "Listed {} monitors", monitors.len());

        let payloads: Vec<Resource> = monitors.iter().cloned().map(Resource::Monitor).collect();
        let elements = monitors.into_iter().map(Self::wrap).collect();

        Ok(ElementSet { elements, payloads })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Resource>> {
        Ok(self.api.get_monitor(id).await?.map(Resource::Monitor))
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<Resource>> {
        // The remote search matches substrings
        let found = self.api.find_monitors_by_name(name).await?;
        Ok(found
            .into_iter()
            .filter(|m| m.name.as_deref() == Some(name))
            .map(Resource::Monitor)
            .collect())
    }

    async fn create(&self, element: &ConfigElement) -> Result<Resource> {
        let Resource::Monitor(monitor) = element.delegate() else {
            return Err(SyncError::UnexpectedPayload {
                kind: KIND,
                found: element.delegate().kind(),
            });
        };

        let payload = Monitor {
            id: None,
            ..monitor.clone()
        };
        let created = self.api.create_monitor(&payload).await?;
        Ok(Resource::Monitor(created))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_monitor(id).await?;
        Ok(())
    }
}
