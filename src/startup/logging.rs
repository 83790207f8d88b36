//! File-backed `tracing` setup.
//!
//! The terminal belongs to the TUI while it runs, so log output goes to a
//! file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::ClientConfig;

/// Log file name inside the cache directory.
pub const LOG_FILE_NAME: &str = "chatshell.log";

/// Default log location: `<cache dir>/chatshell/chatshell.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("chatshell").join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber.
///
/// Returns the path being written to, or `None` when no log location could
/// be determined. A subscriber installed earlier (e.g. by a test) is left in
/// place.
pub fn init_logging(config: &ClientConfig) -> io::Result<Option<PathBuf>> {
    let path = match config.log_file.clone().or_else(default_log_path) {
        Some(path) => path,
        None => return Ok(None),
    };

    let file = open_log_file(&path)?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            endpoint = %config.endpoint_url(),
            "Logging initialized"
        );
    }

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("chatshell/chatshell.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("app.log");

        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_init_logging_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        let config = ClientConfig::default()
            .with_log_file(&path)
            .with_log_filter("not a [valid filter");

        let result = init_logging(&config).unwrap();
        assert_eq!(result, Some(path.clone()));
        assert!(path.exists());
    }
}
