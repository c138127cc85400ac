//! HTTP client settings for the monitoring API

use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound for a single request
const MAX_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout, bare seconds or humantime (`30s`, `2m`)
    #[serde(with = "crate::domains::utils::serde_duration")]
    pub timeout: Duration,

    pub user_agent: String,

    /// Disable only for API proxies with self-signed certificates
    #[serde(default = "crate::domains::utils::default_true")]
    pub verify_ssl: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("ddbackup/{}", env!("CARGO_PKG_VERSION")),
            verify_ssl: true,
        }
    }
}

impl Validatable for HttpConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.timeout.as_secs(), "timeout", self.domain_name())?;
        if self.timeout > MAX_TIMEOUT {
            return Err(self.validation_error(format!(
                "timeout must be at most {}s, got {}s",
                MAX_TIMEOUT.as_secs(),
                self.timeout.as_secs()
            )));
        }
        validate_required_string(&self.user_agent, "user_agent", self.domain_name())
    }

    fn domain_name(&self) -> &'static str {
        "http"
    }
}
