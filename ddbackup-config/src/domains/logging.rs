//! Logging configuration

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level and output format of the tracing subscriber
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when neither `--log-level` nor `RUST_LOG` is set
    pub level: LogLevel,

    pub format: LogFormat,

    /// Print file and line of each event
    pub include_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
    Compact,
    Pretty,
}

const LEVELS: [(&str, LogLevel); 5] = [
    ("error", LogLevel::Error),
    ("warn", LogLevel::Warn),
    ("info", LogLevel::Info),
    ("debug", LogLevel::Debug),
    ("trace", LogLevel::Trace),
];

const FORMATS: [(&str, LogFormat); 4] = [
    ("json", LogFormat::Json),
    ("text", LogFormat::Text),
    ("compact", LogFormat::Compact),
    ("pretty", LogFormat::Pretty),
];

fn lookup<T: Copy + PartialEq>(table: &[(&'static str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

fn label<T: Copy + PartialEq>(table: &[(&'static str, T)], value: T) -> &'static str {
    table
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(label, _)| *label)
        .unwrap_or("unknown")
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        label(&LEVELS, *self)
    }
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        label(&FORMATS, *self)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = if s.eq_ignore_ascii_case("warning") { "warn" } else { s };
        lookup(&LEVELS, name).ok_or_else(|| format!("Invalid log level: {}", s))
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&FORMATS, s).ok_or_else(|| format!("Invalid log format: {}", s))
    }
}

impl Validatable for LoggingConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "logging"
    }
}
