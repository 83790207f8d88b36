//! Wire types for a single turn against the dialogue service.
//!
//! ```json
//! // request
//! { "message": "hello", "context": { "state": "START" } }
//! // response
//! { "response": "Hi **there**!", "context": { "state": "GREETED" } }
//! ```

use serde::{Deserialize, Serialize};

use super::state::ConversationState;

/// Outbound half of a turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRequest {
    /// The user utterance; empty for the system "start" trigger
    pub message: String,
    /// State token echoed back to the service
    pub context: ConversationState,
}

impl TurnRequest {
    pub fn new(message: impl Into<String>, context: ConversationState) -> Self {
        Self {
            message: message.into(),
            context,
        }
    }
}

/// Inbound half of a turn. Both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnResponse {
    /// Reply text, possibly containing `**bold**` spans and newlines
    pub response: String,
    /// Replacement state token
    pub context: ConversationState,
}
