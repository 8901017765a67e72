//! Resource API client implementation using reqwest.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;
use zeroize::Zeroizing;

use crate::domain::{API_TOKEN_ENV, ApiConfig, AppError};
use crate::ports::{LinkRequest, RemoteLink, RemoteStore, ResourceClient};

const DEFAULT_STATUS_MESSAGE: &str = "Resource API request failed";

/// HTTP transport for the resource API.
///
/// Each trait method performs exactly one request. Nothing is retried.
#[derive(Clone)]
pub struct HttpResourceClient {
    api_token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpResourceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResourceClient")
            .field("api_url", &self.api_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl HttpResourceClient {
    /// Create a new HTTP client with the given API token and configuration.
    pub fn new(api_token: String, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Api {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_token, api_url: config.url.clone(), client })
    }

    /// Create from the token environment variable.
    pub fn from_env(config: &ApiConfig) -> Result<Self, AppError> {
        let api_token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(API_TOKEN_ENV.into()))?;

        Self::new(api_token, config)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::InvalidConfig(format!("api url '{}' cannot be a base", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn post<B: Serialize>(&self, url: Url, body: &B) -> Result<String, AppError> {
        debug!("POST {}", url.path());
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| AppError::Api {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::Api { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct CreateStoreBody<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateSecretBody<'a> {
    name: &'a str,
    secret: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateItemBody<'a> {
    item_key: &'a str,
    item_value: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateLinkBody<'a> {
    name: &'a str,
    resource_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct StoreResponse {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct LinkResponse {
    id: String,
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::Api {
        message: format!("Failed to parse response: {}", e),
        status: None,
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ResourceClient for HttpResourceClient {
    fn create_secret_store(&self, name: &str) -> Result<RemoteStore, AppError> {
        let url = self.endpoint(&["resources", "stores", "secret"])?;
        let store: StoreResponse = decode(&self.post(url, &CreateStoreBody { name })?)?;
        Ok(RemoteStore { id: store.id, name: store.name })
    }

    fn create_secret(&self, store_id: &str, name: &str, secret: &[u8]) -> Result<(), AppError> {
        let url = self.endpoint(&["resources", "stores", "secret", store_id, "secrets"])?;
        let encoded = Zeroizing::new(BASE64.encode(secret));
        self.post(url, &CreateSecretBody { name, secret: &encoded })?;
        Ok(())
    }

    fn create_config_store(&self, name: &str) -> Result<RemoteStore, AppError> {
        let url = self.endpoint(&["resources", "stores", "config"])?;
        let store: StoreResponse = decode(&self.post(url, &CreateStoreBody { name })?)?;
        Ok(RemoteStore { id: store.id, name: store.name })
    }

    fn create_config_store_item(
        &self,
        store_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), AppError> {
        let url = self.endpoint(&["resources", "stores", "config", store_id, "item"])?;
        self.post(url, &CreateItemBody { item_key: key, item_value: value })?;
        Ok(())
    }

    fn create_resource_link(&self, request: &LinkRequest) -> Result<RemoteLink, AppError> {
        let version = request.service_version.to_string();
        let url =
            self.endpoint(&["service", &request.service_id, "version", &version, "resource"])?;
        let link: LinkResponse = decode(&self.post(
            url,
            &CreateLinkBody { name: &request.name, resource_id: &request.resource_id },
        )?)?;
        Ok(RemoteLink { id: link.id })
    }
}
