//! Network-related error types.
//!
//! Errors raised while talking to the game-data API or the icon render
//! service.

use std::fmt;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String },

    /// The URL could not be built or parsed.
    InvalidUrl { url: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Rate limited by server.
    RateLimited,

    /// The body could not be decoded as the expected type.
    InvalidResponse { message: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient.
    ///
    /// Nothing retries automatically; transient failures are logged at warn
    /// level, the rest at error level.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::HttpStatus { status, .. } => *status >= 500 || *status == 408,
            NetworkError::RateLimited => true,
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Whether the API answered that the requested IDs do not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status: 404, .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the Guild Wars 2 API. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout { .. } => {
                "The Guild Wars 2 API did not answer in time.".to_string()
            }
            NetworkError::InvalidUrl { url } => format!("'{}' is not a valid URL.", url),
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The requested game object does not exist.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "The Guild Wars 2 API is having issues.".to_string(),
                _ => format!("The Guild Wars 2 API returned HTTP {}.", status),
            },
            NetworkError::RateLimited => "Too many requests. Please wait a moment.".to_string(),
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from the Guild Wars 2 API.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited => "E_NET_RATE",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited => write!(f, "Rate limited"),
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a reqwest error into a NetworkError.
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str) -> NetworkError {
    if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_timeout() {
        NetworkError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_builder() {
        NetworkError::InvalidUrl {
            url: url.to_string(),
        }
    } else if let Some(status) = err.status() {
        match status.as_u16() {
            429 => NetworkError::RateLimited,
            code => NetworkError::HttpStatus {
                status: code,
                message: err.to_string(),
            },
        }
    } else if err.is_decode() {
        NetworkError::InvalidResponse {
            message: format!("Failed to decode response: {}", err),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(NetworkError::Timeout {
            url: "u".to_string()
        }
        .is_retryable());
        assert!(NetworkError::HttpStatus {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(!NetworkError::HttpStatus {
            status: 404,
            message: String::new()
        }
        .is_retryable());
        assert!(!NetworkError::InvalidResponse {
            message: String::new()
        }
        .is_retryable());
    }

    #[test]
    fn test_not_found() {
        assert!(NetworkError::HttpStatus {
            status: 404,
            message: "all ids provided are invalid".to_string()
        }
        .is_not_found());
        assert!(!NetworkError::RateLimited.is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            NetworkError::HttpStatus {
                status: 500,
                message: "boom".to_string()
            }
            .to_string(),
            "HTTP 500 error: boom"
        );
        assert_eq!(
            NetworkError::Timeout {
                url: "https://api.guildwars2.com/v2/items".to_string()
            }
            .to_string(),
            "Request to 'https://api.guildwars2.com/v2/items' timed out"
        );
    }

    #[test]
    fn test_user_message_by_status() {
        let not_found = NetworkError::HttpStatus {
            status: 404,
            message: String::new(),
        };
        assert!(not_found.user_message().contains("does not exist"));
        let teapot = NetworkError::HttpStatus {
            status: 418,
            message: String::new(),
        };
        assert!(teapot.user_message().contains("418"));
    }

    #[tokio::test]
    async fn test_classify_connection_refused() {
        let url = "http://127.0.0.1:59998/v2/items";
        let err = reqwest::get(url).await.unwrap_err();
        let classified = classify_reqwest_error(&err, url);
        assert!(matches!(
            classified,
            NetworkError::ConnectionFailed { .. } | NetworkError::Other { .. }
        ));
    }
}
