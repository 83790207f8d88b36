//! AppMessage enum for async communication within the application.

use crate::error::TurnError;
use crate::models::TurnResponse;
use crate::transcript::PlaceholderHandle;

/// Messages received from async operations
#[derive(Debug)]
pub enum AppMessage {
    /// A turn's network round trip finished, successfully or not
    TurnFinished {
        handle: PlaceholderHandle,
        result: Result<TurnResponse, TurnError>,
    },
}
