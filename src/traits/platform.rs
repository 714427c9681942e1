//! Platform integration trait.
//!
//! Clipboard writes, opening URLs and mirroring the current link into a
//! navigation fragment all go through [`Platform`] so the component can be
//! exercised without a display or a browser.

use thiserror::Error;

/// Errors raised by platform integrations.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The clipboard could not be opened or written.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The URL could not be opened.
    #[error("Failed to open '{url}': {message}")]
    Browser { url: String, message: String },

    /// There is nothing to copy.
    #[error("Nothing to copy")]
    EmptyValue,
}

/// Host environment operations used by the main component.
pub trait Platform: Send + Sync {
    /// Write `value` to the system clipboard.
    fn copy_to_clipboard(&self, value: &str) -> Result<(), PlatformError>;

    /// Open `url` in the user's browser.
    fn navigate_to_url(&self, url: &str) -> Result<(), PlatformError>;

    /// Record the fragment mirroring the current link (`/` when none).
    fn store_navigation_fragment(&self, fragment: &str);

    /// The fragment last stored.
    fn navigation_fragment(&self) -> String;
}
