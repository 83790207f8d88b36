//! Client for the remote dialogue service.
//!
//! The service exposes one conversational endpoint (`POST /chat` by default)
//! that takes `{message, context}` and answers `{response, context}`. All
//! dialogue logic lives on the other side; this client only moves bytes.

use std::sync::Arc;

use tracing::debug;

use crate::error::TurnError;
use crate::models::{TurnRequest, TurnResponse};
use crate::traits::HttpClient;

/// Longest error body kept in a [`TurnError::Status`] message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Sends turns to the dialogue service over an injected [`HttpClient`].
#[derive(Clone)]
pub struct DialogueClient {
    http: Arc<dyn HttpClient>,
    endpoint: String,
    base_url: String,
}

impl DialogueClient {
    /// `base_url` is the service root, `endpoint` the full chat URL.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one request/response cycle.
    ///
    /// Non-2xx statuses, transport errors, and undecodable bodies all come
    /// back as `Err`; none of them are retried here.
    pub async fn send_turn(&self, request: &TurnRequest) -> Result<TurnResponse, TurnError> {
        let body = serde_json::to_string(request).map_err(TurnError::Encode)?;

        debug!(endpoint = %self.endpoint, bytes = body.len(), "Sending turn");
        let response = self.http.post_json(&self.endpoint, &body).await?;

        if !response.is_success() {
            return Err(TurnError::Status {
                status: response.status,
                message: response.body_excerpt(MAX_ERROR_BODY_CHARS),
            });
        }

        response.decode::<TurnResponse>().map_err(TurnError::Decode)
    }

    /// Check that the service root answers at all. Returns the status code.
    pub async fn probe(&self) -> Result<u16, TurnError> {
        let response = self.http.get(&self.base_url).await?;
        Ok(response.status)
    }
}

impl std::fmt::Debug for DialogueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueClient")
            .field("endpoint", &self.endpoint)
            .field("base_url", &self.base_url)
            .finish()
    }
}
