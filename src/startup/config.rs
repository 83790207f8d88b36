//! Client configuration.
//!
//! Values come from defaults, then environment variables, then command-line
//! overrides, in that order.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Default service root (the dialogue service's development port).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default conversational endpoint path.
pub const DEFAULT_CHAT_PATH: &str = "/chat";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_URL: &str = "CHATSHELL_URL";
pub const ENV_CHAT_PATH: &str = "CHATSHELL_CHAT_PATH";
pub const ENV_TIMEOUT_SECS: &str = "CHATSHELL_TIMEOUT_SECS";
pub const ENV_LOG: &str = "CHATSHELL_LOG";
pub const ENV_LOG_FILE: &str = "CHATSHELL_LOG_FILE";
pub const ENV_DARK: &str = "CHATSHELL_DARK";

/// Command-line overrides layered on top of [`ClientConfig::from_env`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub dark_mode: bool,
    pub autostart: bool,
}

/// Configuration for one client session.
///
/// # Example
///
/// ```ignore
/// use chatshell::startup::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:8080")
///     .with_dark_mode(true);
/// assert_eq!(config.endpoint_url(), "http://localhost:8080/chat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root, e.g. `http://127.0.0.1:5000`
    pub base_url: String,
    /// Path of the chat endpoint under `base_url`
    pub chat_path: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Log file location; `None` uses the cache directory
    pub log_file: Option<PathBuf>,
    /// Start in the dark theme
    pub dark_mode: bool,
    /// Fire the start trigger as soon as the UI is up
    pub autostart: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            request_timeout: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            dark_mode: false,
            autostart: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_chat_path(mut self, path: impl Into<String>) -> Self {
        self.chat_path = path.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    pub fn with_autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }

    /// Build config from `CHATSHELL_*` environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL) {
            config.base_url = url;
        }
        if let Some(path) = lookup(ENV_CHAT_PATH) {
            config.chat_path = path;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let parsed = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS.to_string(),
                    value: secs.clone(),
                })?;
            config.request_timeout = (parsed > 0).then(|| Duration::from_secs(parsed));
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }
        if let Some(dark) = lookup(ENV_DARK) {
            config.dark_mode = matches!(dark.trim(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Layer command-line flags over this config.
    pub fn apply(mut self, overrides: CliOverrides) -> Self {
        if let Some(url) = overrides.base_url {
            self.base_url = url;
        }
        self.dark_mode |= overrides.dark_mode;
        self.autostart |= overrides.autostart;
        self
    }

    /// Check that the service URL is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
            _ => Err(ConfigError::InvalidUrl(self.base_url.clone())),
        }
    }

    /// Service root without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Full URL of the chat endpoint.
    pub fn endpoint_url(&self) -> String {
        let path = self.chat_path.trim();
        if path.is_empty() {
            return self.base_url().to_string();
        }
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }
}
