//! Startup: configuration loading and logging.
//!
//! Both run before the terminal is taken over, so failures can still be
//! printed to stderr.
//!
//! # Usage
//!
//! ```ignore
//! use chatshell::startup::{init_logging, ClientConfig};
//!
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//! init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{CliOverrides, ClientConfig};
pub use logging::{default_log_path, init_logging};
