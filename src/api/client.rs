//! Game-data API client.
//!
//! Executes [`ApiRequest`]s through an injected [`HttpClient`], so the same
//! client runs against the live API, a `wiremock` server or a
//! [`MockHttpClient`](crate::adapters::MockHttpClient).

use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::endpoints::ApiRequest;
use crate::config::{AppConfig, DEFAULT_API_URL, DEFAULT_SCHEMA_VERSION};
use crate::error::NetworkError;
use crate::traits::{Headers, HttpClient};

/// Header selecting the response schema.
pub const SCHEMA_VERSION_HEADER: &str = "X-Schema-Version";

/// Client for the game-data API.
pub struct Gw2ApiClient {
    http: Arc<dyn HttpClient>,
    /// Base URL, without trailing slash
    base_url: String,
    lang: Option<String>,
    schema_version: String,
}

impl Gw2ApiClient {
    /// Create a client for the public API with no language set.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            base_url: DEFAULT_API_URL.to_string(),
            lang: None,
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
        }
    }

    /// Create a client from the application config.
    pub fn from_config(http: Arc<dyn HttpClient>, config: &AppConfig) -> Self {
        let mut client = Self::new(http)
            .with_base_url(&config.api_base_url)
            .with_schema_version(&config.schema_version);
        client.lang = config.lang.clone();
        client
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    pub fn with_schema_version(mut self, version: &str) -> Self {
        self.schema_version = version.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client, shared with the icon loader.
    pub fn http(&self) -> Arc<dyn HttpClient> {
        Arc::clone(&self.http)
    }

    /// Full URL for a request, including `lang`.
    pub fn url_for<T>(&self, request: &ApiRequest<T>) -> String {
        let mut params: Vec<String> = request
            .query()
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_list(value)))
            .collect();
        if let Some(lang) = &self.lang {
            params.push(format!("lang={}", urlencoding::encode(lang)));
        }

        if params.is_empty() {
            format!("{}{}", self.base_url, request.path())
        } else {
            format!("{}{}?{}", self.base_url, request.path(), params.join("&"))
        }
    }

    /// Execute a request and decode the body.
    ///
    /// Non-2xx responses become [`NetworkError::HttpStatus`] (or
    /// `RateLimited`), bodies that do not decode become `InvalidResponse`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &ApiRequest<T>,
    ) -> Result<T, NetworkError> {
        let url = self.url_for(request);

        let mut headers = Headers::new();
        headers.insert(
            SCHEMA_VERSION_HEADER.to_string(),
            self.schema_version.clone(),
        );

        tracing::debug!("Requesting {}", url);
        let response = self.http.get(&url, &headers).await?.error_for_status()?;

        response.json::<T>().map_err(|e| NetworkError::InvalidResponse {
            message: format!("{}: {}", request.path(), e),
        })
    }

    /// Execute a request, treating "not found" as `None`.
    ///
    /// Other failures are logged (transient ones at warn level) and returned.
    pub async fn execute_optional<T: DeserializeOwned>(
        &self,
        request: &ApiRequest<T>,
    ) -> Result<Option<T>, NetworkError> {
        match self.execute(request).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => {
                tracing::debug!("{} not found: {}", request.path(), e);
                Ok(None)
            }
            Err(e) if e.is_retryable() => {
                tracing::warn!("[{}] Request to {} failed: {}", e.error_code(), request.path(), e);
                Err(e)
            }
            Err(e) => {
                tracing::error!("[{}] Request to {} failed: {}", e.error_code(), request.path(), e);
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for Gw2ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gw2ApiClient")
            .field("base_url", &self.base_url)
            .field("lang", &self.lang)
            .field("schema_version", &self.schema_version)
            .finish()
    }
}

/// Percent-encode a comma-separated value, keeping the commas.
fn encode_list(value: &str) -> String {
    value
        .split(',')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
