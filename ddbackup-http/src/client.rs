//! reqwest implementation of the remote API traits

use crate::api::{DashboardsApi, DowntimesApi, MonitorsApi};
use crate::config::{Credentials, HttpConfig};
use crate::errors::HttpError;
use crate::models::{
    Dashboard, DashboardEnvelope, DashboardList, DashboardSummary, Downtime, Monitor,
};
use crate::types::HttpMethod;
use async_trait::async_trait;
use ddbackup_config::BackupConfig;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

const API_KEY_HEADER: &str = "DD-API-KEY";
const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// Client for the monitoring v1 REST API.
///
/// One instance is shared (behind an `Arc`) by all resource adapters of a run.
#[derive(Debug, Clone)]
pub struct DatadogClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl DatadogClient {
    /// Create a client for `base_url`, e.g. `https://api.datadoghq.com/api`
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        config: HttpConfig,
    ) -> Result<Self, HttpError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                base_url
            )));
        }

        debug!(
            "Creating API client for {} with {}s timeout",
            base_url,
            config.timeout.as_secs()
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Build a client from the loaded application config
    pub fn from_config(config: &BackupConfig) -> Result<Self, HttpError> {
        let (api_key, app_key) = config
            .api
            .credentials()
            .map_err(|e| HttpError::ConfigError(e.to_string()))?;

        Self::new(
            &config.api.base_url,
            Credentials::new(api_key, app_key),
            config.http.clone().into(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        if method.is_mutating() {
            info!("{} {}", method, url);
        } else {
            debug!("{} {}", method, url);
        }

        self.client
            .request(method.into(), url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .header(APP_KEY_HEADER, &self.credentials.app_key)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, HttpError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(HttpError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self.execute(self.request(HttpMethod::Get, path)).await?;
        Self::json(response).await
    }

    /// GET of a single object, mapping 404 to `None`
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, HttpError> {
        match self.execute(self.request(HttpMethod::Get, path)).await {
            Ok(response) => Ok(Some(Self::json(response).await?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(HttpMethod::Post, path).json(body);
        let response = self.execute(request).await?;
        Self::json(response).await
    }

    async fn remove(&self, path: &str) -> Result<(), HttpError> {
        self.execute(self.request(HttpMethod::Delete, path)).await?;
        Ok(())
    }
}

#[async_trait]
impl MonitorsApi for DatadogClient {
    async fn list_monitors(&self) -> Result<Vec<Monitor>, HttpError> {
        self.fetch("/v1/monitor").await
    }

    async fn get_monitor(&self, id: i64) -> Result<Option<Monitor>, HttpError> {
        self.fetch_optional(&format!("/v1/monitor/{}", id)).await
    }

    async fn find_monitors_by_name(&self, name: &str) -> Result<Vec<Monitor>, HttpError> {
        let request = self
            .request(HttpMethod::Get, "/v1/monitor")
            .query(&[("name", name)]);
        let response = self.execute(request).await?;
        Self::json(response).await
    }

    async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor, HttpError> {
        self.post("/v1/monitor", monitor).await
    }

    async fn delete_monitor(&self, id: i64) -> Result<(), HttpError> {
        self.remove(&format!("/v1/monitor/{}", id)).await
    }
}

#[async_trait]
impl DashboardsApi for DatadogClient {
    async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>, HttpError> {
        let list: DashboardList = self.fetch("/v1/dash").await?;
        Ok(list.dashes)
    }

    async fn get_dashboard(&self, id: i64) -> Result<Option<Dashboard>, HttpError> {
        let envelope: Option<DashboardEnvelope> =
            self.fetch_optional(&format!("/v1/dash/{}", id)).await?;
        Ok(envelope.map(|e| e.dash))
    }

    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard, HttpError> {
        let envelope: DashboardEnvelope = self.post("/v1/dash", dashboard).await?;
        Ok(envelope.dash)
    }

    async fn delete_dashboard(&self, id: i64) -> Result<(), HttpError> {
        self.remove(&format!("/v1/dash/{}", id)).await
    }
}

#[async_trait]
impl DowntimesApi for DatadogClient {
    async fn list_downtimes(&self) -> Result<Vec<Downtime>, HttpError> {
        self.fetch("/v1/downtime").await
    }

    async fn get_downtime(&self, id: i64) -> Result<Option<Downtime>, HttpError> {
        self.fetch_optional(&format!("/v1/downtime/{}", id)).await
    }

    async fn create_downtime(&self, downtime: &Downtime) -> Result<Downtime, HttpError> {
        self.post("/v1/downtime", downtime).await
    }

    async fn delete_downtime(&self, id: i64) -> Result<(), HttpError> {
        self.remove(&format!("/v1/downtime/{}", id)).await
    }
}
