//! Reconciliation between local kind files and the monitoring API
//!
//! Each resource kind is handled by a [`ResourceAdapter`]. The [`SyncEngine`]
//! drives the adapters through pull (remote to file), push (file to remote,
//! create only) and delete (remove every filed id remotely).

pub mod adapters;
pub mod element;
pub mod engine;
pub mod error;
pub mod store;
pub mod types;

use std::sync::Arc;

pub use adapters::{DashboardAdapter, DowntimeAdapter, MonitorAdapter, ResourceAdapter};
pub use element::{ConfigElement, ElementSet, Resource, NO_ID};
pub use engine::SyncEngine;
pub use error::{Result, SyncError};
pub use store::FileStore;
pub use types::{SyncOptions, SyncReport};

use ddbackup_http::{DashboardsApi, DowntimesApi, MonitorsApi};

/// The standard adapter set: monitors, dashboards, downtimes
pub fn default_adapters<C>(client: Arc<C>) -> Vec<Box<dyn ResourceAdapter>>
where
    C: MonitorsApi + DashboardsApi + DowntimesApi + 'static,
{
    vec![
        Box::new(MonitorAdapter::new(client.clone())),
        Box::new(DashboardAdapter::new(client.clone())),
        Box::new(DowntimeAdapter::new(client)),
    ]
}
