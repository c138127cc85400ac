//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A `DDBACKUP_*` variable holds a value of the wrong shape
    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Domain configuration error in {domain}: {message}")]
    DomainError { domain: String, message: String },
}
