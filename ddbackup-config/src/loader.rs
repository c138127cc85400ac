//! Configuration loading and environment variable handling

use crate::domains::utils::parse_duration;
use crate::domains::{api::ApiConfig, http::HttpConfig, logging, sync::SyncConfig, BackupConfig};
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "DDBACKUP".to_string(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<BackupConfig> {
        let path = path.as_ref();
        debug!("Reading configuration from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file is a valid "all defaults" configuration
        let mut config: BackupConfig = if content.trim().is_empty() {
            BackupConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<BackupConfig> {
        let mut config = BackupConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    fn apply_env_overrides(&self, config: &mut BackupConfig) -> ConfigResult<()> {
        self.apply_api_overrides(&mut config.api);
        self.apply_http_overrides(&mut config.http)?;
        self.apply_logging_overrides(&mut config.logging)?;
        self.apply_sync_overrides(&mut config.sync)?;
        Ok(())
    }

    fn apply_api_overrides(&self, config: &mut ApiConfig) {
        if let Ok(url) = self.get_env_var("API_URL") {
            config.base_url = url;
        }

        if let Ok(key) = self.get_env_var("API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(key) = self.get_env_var("APP_KEY") {
            config.app_key = Some(key);
        }
    }

    fn apply_http_overrides(&self, config: &mut HttpConfig) -> ConfigResult<()> {
        if let Ok(timeout) = self.get_env_var("HTTP_TIMEOUT") {
            config.timeout = parse_duration(&timeout)
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_TIMEOUT: {}", e)))?;
        }

        if let Ok(user_agent) = self.get_env_var("HTTP_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(verify_ssl) = self.get_env_var("HTTP_VERIFY_SSL") {
            config.verify_ssl = verify_ssl
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_VERIFY_SSL: {}", e)))?;
        }

        Ok(())
    }

    fn apply_logging_overrides(&self, config: &mut logging::LoggingConfig) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = log_level.parse().map_err(ConfigError::EnvError)?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = format.parse().map_err(ConfigError::EnvError)?;
        }

        Ok(())
    }

    fn apply_sync_overrides(&self, config: &mut SyncConfig) -> ConfigResult<()> {
        if let Ok(dir) = self.get_env_var("CONFIG_DIR") {
            config.config_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = self.get_env_var("BACKUP_DIR") {
            config.backup_dir = PathBuf::from(dir);
        }

        if let Ok(enabled) = self.get_env_var("BACKUP_ENABLED") {
            config.backup = enabled
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid BACKUP_ENABLED: {}", e)))?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
