use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::adapters::ResourceAdapter;
use crate::element::{parse_records, ConfigElement, ElementSet, Resource};
use crate::error::{Result, SyncError};
use ddbackup_http::{Dashboard, DashboardsApi};

const KIND: &str = "dashboards";

/// Dashboards are listed as summaries, so `get_all` fetches each one in full.
pub struct DashboardAdapter {
    api: Arc<dyn DashboardsApi>,
}

impl DashboardAdapter {
    pub fn new(api: Arc<dyn DashboardsApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceAdapter for DashboardAdapter {
    fn name(&self) -> &'static str {
        KIND
    }

    fn decode_file(&self, source: &str) -> Result<Vec<ConfigElement>> {
        let records = parse_records::<Dashboard>(source)
            .map_err(|source| SyncError::Decode { kind: KIND, source })?;

        Ok(records
            .into_iter()
            .map(|r| ConfigElement::new(r.name, r.id, Resource::Dashboard(r.delegate)))
            .collect())
    }

    async fn get_all(&self) -> Result<ElementSet> {
        let summaries = self.api.list_dashboards().await?;
        debug!(kind = KIND, "Listed {} dashboards", summaries.len());

        let mut set = ElementSet::default();
        for summary in summaries {
            let Some(id) = summary.id else {
                warn!(kind = KIND, title = ?summary.title, "Dashboard without id in listing, skipping");
                continue;
            };

            // A dashboard deleted between listing and fetch is a failure too
            let dashboard = self.api.get_dashboard(id).await?.ok_or_else(|| {
                SyncError::Remote(ddbackup_http::HttpError::Status {
                    status: 404,
                    body: format!("dashboard {} disappeared during listing", id),
                })
            })?;

            set.payloads.push(Resource::Dashboard(dashboard.clone()));
            set.elements.push(ConfigElement::new(
                dashboard.title.clone(),
                dashboard.id.or(Some(id)),
                Resource::Dashboard(dashboard),
            ));
        }

        Ok(set)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Resource>> {
        Ok(self.api.get_dashboard(id).await?.map(Resource::Dashboard))
    }

    async fn get_by_name(&self, _name: &str) -> Result<Vec<Resource>> {
        Ok(Vec::new())
    }

    async fn create(&self, element: &ConfigElement) -> Result<Resource> {
        let Resource::Dashboard(dashboard) = element.delegate() else {
            return Err(SyncError::UnexpectedPayload {
                kind: KIND,
                found: element.delegate().kind(),
            });
        };

        let payload = Dashboard {
            id: None,
            ..dashboard.clone()
        };
        let created = self.api.create_dashboard(&payload).await?;
        Ok(Resource::Dashboard(created))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_dashboard(id).await?;
        Ok(())
    }
}
