//! Desktop platform adapter: system clipboard via `arboard`, browser via `open`.

use std::sync::Mutex;

use crate::state::ROOT_FRAGMENT;
use crate::traits::{Platform, PlatformError};

/// Platform backed by the desktop session.
///
/// A terminal has no address bar, so the navigation fragment is kept in
/// memory and surfaced by the UI as the share URL.
///
/// The clipboard handle is opened on first copy and kept for the lifetime of
/// the platform. On X11 and Wayland the copied text is only served while the
/// handle is alive.
pub struct SystemPlatform {
    fragment: Mutex<String>,
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl SystemPlatform {
    pub fn new() -> Self {
        Self {
            fragment: Mutex::new(ROOT_FRAGMENT.to_string()),
            clipboard: Mutex::new(None),
        }
    }

    fn set_clipboard_text(&self, value: &str) -> Result<(), PlatformError> {
        let mut slot = self
            .clipboard
            .lock()
            .map_err(|_| PlatformError::Clipboard("clipboard lock poisoned".to_string()))?;

        let mut clipboard = match slot.take() {
            Some(clipboard) => clipboard,
            None => {
                let opened = arboard::Clipboard::new()
                    .map_err(|e| PlatformError::Clipboard(e.to_string()))?;
                tracing::debug!("Opened system clipboard");
                opened
            }
        };

        // A handle that failed is dropped and reopened on the next copy
        clipboard
            .set_text(value.to_string())
            .map_err(|e| PlatformError::Clipboard(e.to_string()))?;
        *slot = Some(clipboard);
        Ok(())
    }
}

impl std::fmt::Debug for SystemPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clipboard_open = self
            .clipboard
            .lock()
            .map(|c| c.is_some())
            .unwrap_or(false);
        f.debug_struct("SystemPlatform")
            .field("fragment", &self.navigation_fragment())
            .field("clipboard_open", &clipboard_open)
            .finish()
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for SystemPlatform {
    fn copy_to_clipboard(&self, value: &str) -> Result<(), PlatformError> {
        if value.is_empty() {
            return Err(PlatformError::EmptyValue);
        }

        self.set_clipboard_text(value)?;
        tracing::info!("Copied {} to clipboard", value);
        Ok(())
    }

    fn navigate_to_url(&self, url: &str) -> Result<(), PlatformError> {
        open::that(url).map_err(|e| PlatformError::Browser {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        tracing::info!("Opened {}", url);
        Ok(())
    }

    fn store_navigation_fragment(&self, fragment: &str) {
        if let Ok(mut current) = self.fragment.lock() {
            *current = fragment.to_string();
        }
        tracing::debug!("Navigation fragment is now {}", fragment);
    }

    fn navigation_fragment(&self) -> String {
        self.fragment
            .lock()
            .map(|f| f.clone())
            .unwrap_or_else(|_| ROOT_FRAGMENT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_fragment_is_root() {
        assert_eq!(SystemPlatform::new().navigation_fragment(), "/");
    }

    #[test]
    fn test_store_fragment() {
        let platform = SystemPlatform::default();
        platform.store_navigation_fragment("[&AgGqtgAA]");
        assert_eq!(platform.navigation_fragment(), "[&AgGqtgAA]");
    }

    fn clipboard_open(platform: &SystemPlatform) -> bool {
        platform.clipboard.lock().unwrap().is_some()
    }

    #[test]
    fn test_copy_empty_value_is_rejected() {
        let platform = SystemPlatform::new();
        assert!(matches!(
            platform.copy_to_clipboard(""),
            Err(PlatformError::EmptyValue)
        ));
        assert!(!clipboard_open(&platform));
    }

    #[test]
    fn test_clipboard_handle_outlives_copy() {
        let platform = SystemPlatform::new();
        assert!(!clipboard_open(&platform));

        // Headless machines have no clipboard; the handle must then stay closed
        match platform.copy_to_clipboard("[&AgGqtgAA]") {
            Ok(()) => {
                assert!(clipboard_open(&platform));
                platform.copy_to_clipboard("[&CkYSAAA=]").unwrap();
                assert!(clipboard_open(&platform));
            }
            Err(e) => {
                assert!(matches!(e, PlatformError::Clipboard(_)));
                assert!(!clipboard_open(&platform));
            }
        }
        assert!(format!("{:?}", platform).contains("clipboard_open"));
    }
}
