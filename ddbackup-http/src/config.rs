//! HTTP configuration

use ddbackup_config::HttpConfig as ConfigHttpConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        ConfigHttpConfig::default().into()
    }
}

impl From<ConfigHttpConfig> for HttpConfig {
    fn from(config: ConfigHttpConfig) -> Self {
        Self {
            timeout: config.timeout,
            user_agent: config.user_agent,
            verify_ssl: config.verify_ssl,
        }
    }
}

/// API and application keys sent with every request
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub app_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            app_key: app_key.into(),
        }
    }
}

// Keys never show up in logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("app_key", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials::new("abc123", "def456");
        let printed = format!("{:?}", credentials);
        assert!(!printed.contains("abc123"));
        assert!(!printed.contains("def456"));
    }

    #[test]
    fn test_from_config_domain() {
        let domain = ConfigHttpConfig {
            timeout: Duration::from_secs(5),
            user_agent: "agent".to_string(),
            verify_ssl: false,
        };
        let config = HttpConfig::from(domain);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "agent");
        assert!(!config.verify_ssl);
    }
}
