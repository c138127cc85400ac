//! Domain-driven configuration for ddbackup
//!
//! Configuration is split by functional domain (remote API, HTTP client,
//! logging, local sync layout). Each domain carries its own defaults and
//! validation, and every value can be overridden from the environment.

pub mod domains;
pub mod error;
pub mod loader;
pub mod validation;

pub use domains::{
    api::ApiConfig,
    http::HttpConfig,
    logging::{LogFormat, LogLevel, LoggingConfig},
    sync::SyncConfig,
    BackupConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;
