//! Data models for the conversation client.
//!
//! - [`ConversationState`] - opaque service-owned token threaded through turns
//! - [`TurnRequest`] / [`TurnResponse`] - the `/chat` wire format
//! - [`TranscriptEntry`] - a rendered record in the visible thread

pub mod entry;
pub mod state;
pub mod turn;

pub use entry::{Sender, TranscriptEntry};
pub use state::{ConversationState, INITIAL_STATE_JSON};
pub use turn::{TurnRequest, TurnResponse};
