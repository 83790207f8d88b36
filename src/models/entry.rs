//! Transcript entry types.

use crate::transcript::normalize::{normalize_agent_text, normalize_user_text, NormalizedText};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

impl Sender {
    /// Label shown above the entry.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Agent => "Bot",
        }
    }
}

/// A rendered record in the visible thread.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub sender: Sender,
    /// Text exactly as typed or received
    pub text: String,
    /// Display form: bold spans and line breaks resolved for agent text
    pub body: NormalizedText,
}

impl TranscriptEntry {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        let text = text.into();
        let body = match sender {
            Sender::Agent => normalize_agent_text(&text),
            Sender::User => normalize_user_text(&text),
        };
        Self { sender, text, body }
    }
}
