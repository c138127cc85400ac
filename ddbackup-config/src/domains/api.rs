//! Remote API configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, validate_url, Validatable};
use serde::{Deserialize, Serialize};

const REDACTED: &str = "********";

/// Remote monitoring API endpoint and credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API, without the version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `DD-API-KEY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Application key sent as `DD-APPLICATION-KEY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            app_key: None,
        }
    }
}

impl ApiConfig {
    /// Both keys, or a validation error naming the one that is missing.
    ///
    /// Keys are optional in the file so that `config show` and friends work
    /// without credentials; remote actions call this before building a client.
    pub fn credentials(&self) -> ConfigResult<(&str, &str)> {
        let api_key = self.api_key.as_deref().unwrap_or_default();
        let app_key = self.app_key.as_deref().unwrap_or_default();
        validate_required_string(api_key, "api_key", self.domain_name())?;
        validate_required_string(app_key, "app_key", self.domain_name())?;
        Ok((api_key, app_key))
    }

    pub(crate) fn redacted(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            api_key: self.api_key.as_ref().map(|_| REDACTED.to_string()),
            app_key: self.app_key.as_ref().map(|_| REDACTED.to_string()),
        }
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url(&self.base_url, "base_url", self.domain_name())
    }

    fn domain_name(&self) -> &'static str {
        "api"
    }
}

fn default_base_url() -> String {
    "https://api.datadoghq.com/api".to_string()
}
