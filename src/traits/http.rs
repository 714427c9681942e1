//! HTTP client trait abstraction.
//!
//! The game-data API and the icon render service are read-only, so the
//! abstraction only needs GET. Production code uses
//! [`ReqwestHttpClient`](crate::adapters::ReqwestHttpClient); tests inject
//! [`MockHttpClient`](crate::adapters::MockHttpClient).

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

use crate::error::NetworkError;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Convenience constructor for a JSON body.
    pub fn json_body(status: u16, json: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::with_headers(status, headers, Bytes::from(json.to_string()))
    }

    /// Check if the response indicates success (2xx status).
    ///
    /// The API answers 206 when only some of the requested IDs exist, which
    /// counts as success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Turn a non-2xx response into an error, keeping the API's `text` field.
    pub fn error_for_status(self) -> Result<Self, NetworkError> {
        if self.is_success() {
            return Ok(self);
        }

        #[derive(serde::Deserialize)]
        struct ApiErrorBody {
            text: String,
        }

        let message = self
            .json::<ApiErrorBody>()
            .map(|b| b.text)
            .or_else(|_| self.text())
            .unwrap_or_default();

        Err(match self.status {
            429 => NetworkError::RateLimited,
            status => NetworkError::HttpStatus { status, message },
        })
    }
}

/// Trait for HTTP client operations.
///
/// # Example
///
/// ```ignore
/// use gw2link::traits::{HttpClient, Headers};
///
/// async fn fetch<C: HttpClient>(client: &C) -> Result<String, NetworkError> {
///     let response = client.get("https://api.guildwars2.com/v2/build", &Headers::new()).await?;
///     Ok(response.text().unwrap_or_default())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, NetworkError>;
}
