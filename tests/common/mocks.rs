//! Mock fixtures built on `chatshell::adapters::mock`.

pub use chatshell::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use chatshell::traits::{HttpClient, HttpError, Response};

use bytes::Bytes;

/// A 200 reply carrying `response` and a raw JSON `context`.
pub fn reply(response: &str, context: &str) -> MockResponse {
    let body = format!(
        r#"{{"response":{},"context":{}}}"#,
        serde_json::Value::String(response.to_string()),
        context
    );
    MockResponse::Success(Response::new(200, Bytes::from(body)))
}

/// A reply with the given status and raw body.
pub fn raw_reply(status: u16, body: &str) -> MockResponse {
    MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
}

/// A transport failure.
pub fn connection_refused() -> MockResponse {
    MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
}
