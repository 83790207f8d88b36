//! Error types for the chat client.
//!
//! | Type | Category | Handling |
//! |------|----------|----------|
//! | [`TurnError`] | Transport | fallback reply in the transcript, state unchanged |
//! | [`ConfigError`] | Configuration | reported at startup, process exits |
//!
//! An empty user submission is not an error at all; the controller drops it
//! silently.

mod category;
mod config;
mod turn;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use turn::TurnError;

/// Result alias for configuration loading and argument parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;
