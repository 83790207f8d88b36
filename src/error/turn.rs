//! Errors from a single request/response cycle with the dialogue service.

use thiserror::Error;

use super::ErrorCategory;
use crate::traits::HttpError;

/// Anything that keeps a turn from producing a usable reply.
///
/// The conversation controller does not distinguish between variants: all
/// of them end in the fallback reply with the state token left unchanged.
/// The variants exist for logging.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The request never completed (connection refused, timeout, reset)
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The service answered with a non-2xx status
    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request could not be serialized
    #[error("could not encode turn request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The reply was not `{ "response": string, "context": any }`
    #[error("could not decode service reply: {0}")]
    Decode(#[source] serde_json::Error),
}

impl TurnError {
    /// Short error code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            TurnError::Transport(HttpError::Timeout(_)) => "E_TURN_TIMEOUT",
            TurnError::Transport(_) => "E_TURN_TRANSPORT",
            TurnError::Status { .. } => "E_TURN_STATUS",
            TurnError::Encode(_) => "E_TURN_ENCODE",
            TurnError::Decode(_) => "E_TURN_DECODE",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Transport
    }
}
