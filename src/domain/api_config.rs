//! Remote API configuration, read from the `[api]` manifest section.

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Environment variable holding the API token.
pub const API_TOKEN_ENV: &str = "STOWAGE_API_TOKEN";

/// Remote resource API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the resource API.
    #[serde(default = "default_api_url")]
    pub url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "api url '{}' cannot be used as a base URL",
                self.url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.stowage.dev/").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}
