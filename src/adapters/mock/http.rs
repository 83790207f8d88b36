//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors, either fixed per URL or queued one-shot per call.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// `GET` or `POST` (a POST is always JSON)
    pub method: &'static str,
    pub url: String,
    /// JSON body of a POST
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Clones share the same configuration and request log, so a test can hand
/// one clone to the code under test and inspect traffic through another.
///
/// # Example
///
/// ```ignore
/// use chatshell::adapters::mock::{MockHttpClient, MockResponse};
/// use chatshell::traits::{HttpClient, Response};
///
/// let client = MockHttpClient::new();
/// client.queue_response(
///     "http://127.0.0.1:5000/chat",
///     MockResponse::Success(Response::new(200, r#"{"response":"hi","context":{}}"#)),
/// );
///
/// let response = client.post_json("http://127.0.0.1:5000/chat", "{}").await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Fixed responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses by URL, consumed before fixed responses
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            queued: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response returned for every request to `url`.
    ///
    /// The URL is matched exactly first, then as a prefix.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a response returned once, for the next request to `url`.
    pub fn queue_response(&self, url: &str, response: MockResponse) {
        let mut queued = self.queued.lock().unwrap();
        queued.entry(url.to_string()).or_default().push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Record a request.
    fn record_request(&self, method: &'static str, url: &str, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });
    }

    /// Get the response for a URL.
    fn next_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self
            .queued
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front)
        {
            return Some(response);
        }

        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    fn respond(&self, url: &str) -> Result<Response, HttpError> {
        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.record_request("GET", url, None);
        self.respond(url)
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<Response, HttpError> {
        self.record_request("POST", url, Some(body.to_string()));
        self.respond(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_post_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://svc/chat",
            MockResponse::Success(Response::new(200, r#"{"response":"ok"}"#)),
        );

        let response = client
            .post_json("http://svc/chat", r#"{"message":"hi"}"#)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body, Some(r#"{"message":"hi"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_queued_responses_are_consumed_in_order() {
        let client = MockHttpClient::new();
        client.queue_response("http://svc/chat", MockResponse::Success(Response::new(200, "first")));
        client.queue_response("http://svc/chat", MockResponse::Success(Response::new(201, "second")));
        client.set_response("http://svc/chat", MockResponse::Success(Response::new(202, "fixed")));

        let statuses: Vec<u16> = futures::future::join_all(
            (0..3).map(|_| client.post_json("http://svc/chat", "{}")),
        )
        .await
        .into_iter()
        .map(|r| r.unwrap().status)
        .collect();

        assert_eq!(statuses, vec![200, 201, 202]);
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://svc/chat",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.post_json("http://svc/chat", "{}").await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.get("http://svc/missing").await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_default_and_prefix_match() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(404, "Not Found")));
        client.set_response("http://svc/api", MockResponse::Success(Response::new(200, "api")));

        let prefixed = client.get("http://svc/api/v1").await.unwrap();
        let fallback = client.get("http://svc/other").await.unwrap();

        assert_eq!(prefixed.status, 200);
        assert_eq!(fallback.status, 404);
    }

    #[tokio::test]
    async fn test_clone_shares_request_log() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, "")));

        let cloned = client.clone();
        cloned.get("http://svc/").await.unwrap();

        assert_eq!(client.get_requests().len(), 1);
        assert_eq!(client.get_requests()[0].method, "GET");
    }
}
