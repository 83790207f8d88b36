//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, mock) = TestAppBuilder::new()
//!     .with_reply("Hello", r#"{"state":"GREETED"}"#)
//!     .build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use chatshell::app::{App, AppMessage};
use chatshell::models::TranscriptEntry;
use chatshell::startup::ClientConfig;
use tokio::sync::mpsc;

/// Service root used by every mock-backed test.
pub const TEST_BASE_URL: &str = "http://dialogue.test";

/// Chat endpoint under [`TEST_BASE_URL`].
pub const TEST_ENDPOINT: &str = "http://dialogue.test/chat";

/// Config pointing at the mock service.
pub fn test_config() -> ClientConfig {
    ClientConfig::default().with_base_url(TEST_BASE_URL)
}

/// Builder for creating test App instances over a [`MockHttpClient`].
#[derive(Default)]
pub struct TestAppBuilder {
    replies: Vec<MockResponse>,
    dark: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply for the next turn.
    pub fn with_reply(mut self, response: &str, context: &str) -> Self {
        self.replies.push(reply(response, context));
        self
    }

    /// Queue an arbitrary mock outcome for the next turn.
    pub fn with_outcome(mut self, outcome: MockResponse) -> Self {
        self.replies.push(outcome);
        self
    }

    pub fn dark(mut self) -> Self {
        self.dark = true;
        self
    }

    pub fn build(self) -> (App, MockHttpClient) {
        let mock = MockHttpClient::new();
        for outcome in self.replies {
            mock.queue_response(TEST_ENDPOINT, outcome);
        }
        let config = test_config().with_dark_mode(self.dark);
        let app = App::with_http_client(Arc::new(mock.clone()), &config);
        (app, mock)
    }
}

/// Wait for the in-flight turn to finish and apply it, as the main loop would.
pub async fn finish_turn(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    let msg = rx.recv().await.expect("turn result");
    app.handle_message(msg);
}

/// `(label, text)` of every real entry.
pub fn entry_summary(app: &App) -> Vec<(&'static str, String)> {
    app.transcript
        .entries()
        .map(|e: &TranscriptEntry| (e.sender.label(), e.text.clone()))
        .collect()
}

/// Parsed JSON body of the `index`th recorded request.
pub fn request_json(mock: &MockHttpClient, index: usize) -> serde_json::Value {
    let requests = mock.get_requests();
    let body = requests[index].body.as_deref().expect("request body");
    serde_json::from_str(body).expect("request body is JSON")
}
