//! Domain-specific configuration modules

pub mod api;
pub mod http;
pub mod logging;
pub mod sync;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main ddbackup configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BackupConfig {
    /// Remote API endpoint and credentials
    #[serde(default)]
    pub api: api::ApiConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: http::HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,

    /// Local file layout and backup policy
    #[serde(default)]
    pub sync: sync::SyncConfig,
}

impl BackupConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.api.validate()?;
        self.http.validate()?;
        self.logging.validate()?;
        self.sync.validate()?;
        Ok(())
    }

    /// Copy of the configuration with credentials masked, for display
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.api = config.api.redacted();
        config
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        serde_yaml::to_string(&BackupConfig::default())
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}
