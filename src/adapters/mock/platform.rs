//! Platform double that records every interaction.

use std::sync::{Arc, Mutex};

use crate::state::ROOT_FRAGMENT;
use crate::traits::{Platform, PlatformError};

#[derive(Debug, Default)]
struct Recorded {
    clipboard: Vec<String>,
    urls: Vec<String>,
    fragments: Vec<String>,
}

/// In-memory [`Platform`] for tests.
///
/// Clones share the same record. Clipboard and browser failures can be
/// switched on to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    recorded: Arc<Mutex<Recorded>>,
    fail_clipboard: Arc<Mutex<bool>>,
    fail_browser: Arc<Mutex<bool>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent clipboard writes fail.
    pub fn fail_clipboard(&self, fail: bool) {
        *self.fail_clipboard.lock().unwrap() = fail;
    }

    /// Make subsequent browser opens fail.
    pub fn fail_browser(&self, fail: bool) {
        *self.fail_browser.lock().unwrap() = fail;
    }

    /// Values written to the clipboard, oldest first.
    pub fn clipboard(&self) -> Vec<String> {
        self.recorded.lock().unwrap().clipboard.clone()
    }

    /// URLs opened, oldest first.
    pub fn opened_urls(&self) -> Vec<String> {
        self.recorded.lock().unwrap().urls.clone()
    }

    /// Every fragment stored, oldest first.
    pub fn fragments(&self) -> Vec<String> {
        self.recorded.lock().unwrap().fragments.clone()
    }
}

impl Platform for RecordingPlatform {
    fn copy_to_clipboard(&self, value: &str) -> Result<(), PlatformError> {
        if value.is_empty() {
            return Err(PlatformError::EmptyValue);
        }
        if *self.fail_clipboard.lock().unwrap() {
            return Err(PlatformError::Clipboard("no display".to_string()));
        }
        self.recorded.lock().unwrap().clipboard.push(value.to_string());
        Ok(())
    }

    fn navigate_to_url(&self, url: &str) -> Result<(), PlatformError> {
        if *self.fail_browser.lock().unwrap() {
            return Err(PlatformError::Browser {
                url: url.to_string(),
                message: "no browser".to_string(),
            });
        }
        self.recorded.lock().unwrap().urls.push(url.to_string());
        Ok(())
    }

    fn store_navigation_fragment(&self, fragment: &str) {
        self.recorded
            .lock()
            .unwrap()
            .fragments
            .push(fragment.to_string());
    }

    fn navigation_fragment(&self) -> String {
        self.recorded
            .lock()
            .unwrap()
            .fragments
            .last()
            .cloned()
            .unwrap_or_else(|| ROOT_FRAGMENT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_interactions() {
        let platform = RecordingPlatform::new();
        platform.copy_to_clipboard("[&AdsnAAA=]").unwrap();
        platform.navigate_to_url("https://example.com").unwrap();
        platform.store_navigation_fragment("[&AdsnAAA=]");

        assert_eq!(platform.clipboard(), vec!["[&AdsnAAA=]"]);
        assert_eq!(platform.opened_urls(), vec!["https://example.com"]);
        assert_eq!(platform.navigation_fragment(), "[&AdsnAAA=]");
    }

    #[test]
    fn test_default_fragment_is_root() {
        assert_eq!(RecordingPlatform::new().navigation_fragment(), ROOT_FRAGMENT);
    }

    #[test]
    fn test_failures() {
        let platform = RecordingPlatform::new();
        platform.fail_clipboard(true);
        platform.fail_browser(true);

        assert!(matches!(
            platform.copy_to_clipboard("x"),
            Err(PlatformError::Clipboard(_))
        ));
        assert!(matches!(
            platform.navigate_to_url("https://example.com"),
            Err(PlatformError::Browser { .. })
        ));
        assert!(platform.clipboard().is_empty());
    }
}
