//! Per-kind remote API traits
//!
//! The sync engine only ever talks to these traits, which lets tests swap the
//! reqwest client for mocks.

use crate::errors::HttpError;
use crate::models::{Dashboard, DashboardSummary, Downtime, Monitor};
use async_trait::async_trait;

/// Monitor endpoints
#[async_trait]
pub trait MonitorsApi: Send + Sync {
    async fn list_monitors(&self) -> Result<Vec<Monitor>, HttpError>;

    /// `Ok(None)` when the remote answers 404
    async fn get_monitor(&self, id: i64) -> Result<Option<Monitor>, HttpError>;

    /// Server-side name search. The remote matches on substrings.
    async fn find_monitors_by_name(&self, name: &str) -> Result<Vec<Monitor>, HttpError>;

    async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor, HttpError>;

    async fn delete_monitor(&self, id: i64) -> Result<(), HttpError>;
}

/// Dashboard endpoints
#[async_trait]
pub trait DashboardsApi: Send + Sync {
    /// Summaries only; use [`DashboardsApi::get_dashboard`] for full content
    async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>, HttpError>;

    async fn get_dashboard(&self, id: i64) -> Result<Option<Dashboard>, HttpError>;

    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<Dashboard, HttpError>;

    async fn delete_dashboard(&self, id: i64) -> Result<(), HttpError>;
}

/// Downtime endpoints
#[async_trait]
pub trait DowntimesApi: Send + Sync {
    async fn list_downtimes(&self) -> Result<Vec<Downtime>, HttpError>;

    async fn get_downtime(&self, id: i64) -> Result<Option<Downtime>, HttpError>;

    async fn create_downtime(&self, downtime: &Downtime) -> Result<Downtime, HttpError>;

    async fn delete_downtime(&self, id: i64) -> Result<(), HttpError>;
}
