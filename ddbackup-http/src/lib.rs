//! Monitoring API client for ddbackup
//!
//! This crate provides the typed payload models for monitors, dashboards and
//! downtimes, one client trait per resource kind, and a reqwest-backed
//! implementation of all three against the v1 REST API.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod types;

pub use api::{DashboardsApi, DowntimesApi, MonitorsApi};
pub use client::DatadogClient;
pub use config::{Credentials, HttpConfig};
pub use errors::HttpError;
pub use models::{Dashboard, DashboardSummary, Downtime, Monitor};
pub use types::HttpMethod;
