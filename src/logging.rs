//! Logging setup.
//!
//! The terminal belongs to the UI, so log output goes to a file under the
//! user cache directory instead of stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_DIR: &str = "gw2link";
const LOG_FILE: &str = "gw2link.log";

/// `<cache dir>/gw2link/gw2link.log`, if the platform has a cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// `level` is an `EnvFilter` directive such as `info` or `gw2link=debug`.
/// Fails if the file cannot be opened or a subscriber is already installed.
pub fn init_logging(level: &str, path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    tracing::info!("gw2link {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(())
}
