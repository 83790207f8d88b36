//! Configuration and command-line errors.

use thiserror::Error;

use super::ErrorCategory;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The service URL is not an absolute http(s) URL
    #[error("invalid service URL '{0}': expected http:// or https://")]
    InvalidUrl(String),

    /// A flag that takes a value was given without one
    #[error("missing value for {0}")]
    MissingValue(String),

    /// A setting could not be parsed
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },

    /// An unrecognized command-line argument
    #[error("unknown argument '{0}' (try --help)")]
    UnknownArgument(String),
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}
