//! Application configuration.
//!
//! Defaults target the public game-data API. Every field can be overridden
//! from the environment (see [`AppConfig::from_env`]) or through the `with_*`
//! builder methods.

use std::time::Duration;

/// Default game-data API base URL.
pub const DEFAULT_API_URL: &str = "https://api.guildwars2.com";

/// Default site the share URL points at.
pub const DEFAULT_SITE_URL: &str = "https://link.gw2tb.com";

/// Schema version requested from the API.
pub const DEFAULT_SCHEMA_VERSION: &str = "2022-03-23T19:00:00.000Z";

/// Default in-memory icon budget (8 MiB).
pub const DEFAULT_ICON_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Runtime configuration.
///
/// # Example
///
/// ```
/// use gw2link::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_lang("de")
///     .with_timeout_secs(5);
/// assert_eq!(config.lang.as_deref(), Some("de"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the game-data API
    pub api_base_url: String,
    /// Language appended to API requests (`None` leaves the server default)
    pub lang: Option<String>,
    /// `X-Schema-Version` header value
    pub schema_version: String,
    /// Site joined with the navigation fragment to form the share URL
    pub site_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Byte budget of the decoded icon cache
    pub icon_cache_bytes: usize,
    /// `tracing` filter directive
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            lang: Some("en".to_string()),
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            timeout_secs: 10,
            icon_cache_bytes: DEFAULT_ICON_CACHE_BYTES,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request language. An empty string clears it.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        let lang = lang.into();
        self.lang = if lang.is_empty() { None } else { Some(lang) };
        self
    }

    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        self.schema_version = version.into();
        self
    }

    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_icon_cache_bytes(mut self, bytes: usize) -> Self {
        self.icon_cache_bytes = bytes;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Create config from the `GW2LINK_*` environment variables.
    ///
    /// Unset variables keep their defaults. Numbers that fail to parse are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("GW2LINK_API_URL") {
            config = config.with_api_base_url(url);
        }
        if let Ok(lang) = std::env::var("GW2LINK_LANG") {
            config = config.with_lang(lang);
        }
        if let Ok(url) = std::env::var("GW2LINK_SITE_URL") {
            config = config.with_site_url(url);
        }
        if let Some(secs) = parse_env::<u64>("GW2LINK_TIMEOUT_SECS") {
            config = config.with_timeout_secs(secs);
        }
        if let Some(bytes) = parse_env::<usize>("GW2LINK_ICON_CACHE_BYTES") {
            config = config.with_icon_cache_bytes(bytes);
        }
        if let Ok(level) = std::env::var("GW2LINK_LOG") {
            config = config.with_log_level(level);
        }

        config
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}
