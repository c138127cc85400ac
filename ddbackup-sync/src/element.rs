//! Config elements: one remote object plus its identity, as stored on disk
//!
//! The on-disk form of every kind is a YAML sequence of
//!
//! ```yaml
//! - name: cpu high
//!   id: 1234
//!   delegate:
//!     # kind-native payload
//! ```
//!
//! A missing name is stored as `""` and a missing id as `-1`.

use ddbackup_http::{Dashboard, Downtime, Monitor};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Id of an element that has never been created remotely
pub const NO_ID: i64 = -1;

/// Kind-native payload of an element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Monitor(Monitor),
    Dashboard(Dashboard),
    Downtime(Downtime),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Monitor(_) => "monitor",
            Resource::Dashboard(_) => "dashboard",
            Resource::Downtime(_) => "downtime",
        }
    }
}

/// A named, identified wrapper around a [`Resource`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigElement {
    name: String,
    id: i64,
    delegate: Resource,
}

impl ConfigElement {
    pub fn new(name: Option<String>, id: Option<i64>, delegate: Resource) -> Self {
        Self {
            name: name.unwrap_or_default(),
            id: id.unwrap_or(NO_ID),
            delegate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote id, or [`NO_ID`]
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn remote_id(&self) -> Option<i64> {
        (self.id != NO_ID).then_some(self.id)
    }

    pub fn delegate(&self) -> &Resource {
        &self.delegate
    }
}

/// Result of listing one kind remotely
#[derive(Debug, Clone, Default)]
pub struct ElementSet {
    pub elements: Vec<ConfigElement>,
    /// Full payloads, in the same order as `elements`
    pub payloads: Vec<Resource>,
}

impl ElementSet {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// On-disk record shape, generic over the payload type
#[derive(Debug, Deserialize)]
pub(crate) struct ElementRecord<T> {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    pub delegate: T,
}

/// Parse a kind file into typed records. Empty documents yield no records.
pub(crate) fn parse_records<T: DeserializeOwned>(
    source: &str,
) -> Result<Vec<ElementRecord<T>>, serde_yaml::Error> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<ElementRecord<T>>> = serde_yaml::from_str(source)?;
    Ok(records.unwrap_or_default())
}

/// Encode elements as a kind file
pub fn encode_elements(elements: &[ConfigElement]) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(elements)
}
