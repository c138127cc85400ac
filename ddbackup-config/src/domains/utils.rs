//! Shared serde helpers for configuration domains

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

/// Parse bare seconds (`45`) or a humantime string (`30s`, `2m`, `1h 30m`)
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }
    humantime::parse_duration(value).map_err(|e| format!("invalid duration '{}': {}", value, e))
}

/// Durations are written in humantime form and read from either bare
/// seconds or a humantime string.
pub mod serde_duration {
    use super::*;
    use humantime_serde::Serde;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        humantime_serde::serialize(duration, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Seconds(u64),
            Text(Serde<Duration>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Seconds(seconds) => Ok(Duration::from_secs(seconds)),
            Raw::Text(duration) => Ok(duration.into_inner()),
        }
    }
}

pub fn default_true() -> bool {
    true
}
