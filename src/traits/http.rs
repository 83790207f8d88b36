//! Transport seam for the dialogue service.
//!
//! The client needs exactly two exchanges: a JSON POST carrying a turn and a
//! bare GET of the service root for `--check`. Both are expressed here so the
//! turn protocol runs unchanged against the reqwest adapter or the mock.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Status and raw body of a finished exchange.
///
/// Any status is a `Response`; deciding whether 4xx/5xx is a failure is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// At most `max_chars` of the body as text, invalid UTF-8 replaced.
    /// Used to put something readable into status errors.
    pub fn body_excerpt(&self, max_chars: usize) -> String {
        String::from_utf8_lossy(&self.body)
            .chars()
            .take(max_chars)
            .collect()
    }

    /// Deserialize the body as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Why an exchange produced no [`Response`] at all.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Nothing listening, DNS failure, reset before headers
    ConnectionFailed(String),
    /// The configured request timeout elapsed
    Timeout(String),
    /// Headers arrived but the body could not be read
    Body(String),
    /// The URL could not be turned into a request
    InvalidUrl(String),
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "cannot reach service: {}", msg),
            HttpError::Timeout(msg) => write!(f, "service timed out: {}", msg),
            HttpError::Body(msg) => write!(f, "reply body unreadable: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "bad service URL: {}", msg),
            HttpError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// The two exchanges the client performs.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url` with no body.
    async fn get(&self, url: &str) -> Result<Response, HttpError>;

    /// POST `body` to `url` as `application/json`, accepting JSON back.
    async fn post_json(&self, url: &str, body: &str) -> Result<Response, HttpError>;
}
