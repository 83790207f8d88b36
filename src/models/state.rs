//! Opaque conversation-state token.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Seed value for a fresh conversation.
pub const INITIAL_STATE_JSON: &str = r#"{"state":"START"}"#;

/// Service-owned conversation state, carried between turns.
///
/// The client never looks inside: the token is kept as the raw JSON text the
/// service sent, so the next request echoes it byte-for-byte. It is replaced
/// as a whole after each successful turn and never merged or edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationState(Box<RawValue>);

impl ConversationState {
    /// The `{"state":"START"}` token every conversation begins with.
    pub fn initial() -> Self {
        Self::from_json(INITIAL_STATE_JSON.to_string())
            .unwrap_or_else(|_| unreachable!("seed state is valid JSON"))
    }

    /// Wrap raw JSON text, failing if it is not a single JSON value.
    pub fn from_json(json: String) -> Result<Self, serde_json::Error> {
        RawValue::from_string(json).map(Self)
    }

    /// The raw JSON text of the token.
    pub fn as_json(&self) -> &str {
        self.0.get()
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::initial()
    }
}

impl PartialEq for ConversationState {
    fn eq(&self, other: &Self) -> bool {
        self.as_json() == other.as_json()
    }
}

impl Eq for ConversationState {}
