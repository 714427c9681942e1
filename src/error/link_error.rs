//! Unified error type for gw2link.

use thiserror::Error;

use super::network::NetworkError;
use crate::chatlink::ChatLinkError;
use crate::icons::IconError;
use crate::traits::PlatformError;

/// Every error the library can surface.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Chat link encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] ChatLinkError),

    /// Talking to the game-data API failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Clipboard or browser integration failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// An icon could not be loaded.
    #[error(transparent)]
    Icon(#[from] IconError),

    /// Filesystem error (log file, terminal).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LinkError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LinkError::Codec(err) => err.error_code(),
            LinkError::Network(err) => err.error_code(),
            LinkError::Platform(_) => "E_PLATFORM",
            LinkError::Icon(_) => "E_ICON",
            LinkError::Io(_) => "E_IO",
            LinkError::Serialization(_) => "E_SERDE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LinkError::Codec(err) => format!("Invalid chat code: {}", err),
            LinkError::Network(err) => err.user_message(),
            LinkError::Platform(err) => err.to_string(),
            LinkError::Icon(_) => "The icon could not be loaded.".to_string(),
            LinkError::Io(err) => format!("File system error: {}", err),
            LinkError::Serialization(err) => format!("Could not format output: {}", err),
        }
    }
}

/// Type alias for Results using LinkError.
pub type LinkResult<T> = Result<T, LinkError>;
