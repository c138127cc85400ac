pub mod dashboards;
pub mod downtimes;
pub mod monitors;

use async_trait::async_trait;

use crate::element::{ConfigElement, ElementSet, Resource};
use crate::error::Result;

pub use dashboards::DashboardAdapter;
pub use downtimes::DowntimeAdapter;
pub use monitors::MonitorAdapter;

/// Per-kind bridge between config elements and the remote API.
///
/// Adapters are stateless apart from their API handle, so the engine can call
/// them any number of times.
#[async_trait]
pub trait ResourceAdapter: Send + Sync {
    /// Kind name, also the stem of the kind file (`monitors.yaml`)
    fn name(&self) -> &'static str;

    /// Decode the contents of a kind file
    fn decode_file(&self, source: &str) -> Result<Vec<ConfigElement>>;

    /// Everything of this kind that exists remotely
    async fn get_all(&self) -> Result<ElementSet>;

    /// `Ok(None)` when the remote has no object with this id
    async fn get_by_id(&self, id: i64) -> Result<Option<Resource>>;

    /// Remote objects whose name equals `name` exactly
    async fn get_by_name(&self, name: &str) -> Result<Vec<Resource>>;

    async fn create(&self, element: &ConfigElement) -> Result<Resource>;

    async fn delete(&self, id: i64) -> Result<()>;
}
