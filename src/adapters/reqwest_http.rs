//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, Response};

const JSON: &str = "application/json";

/// Production transport. Cloning shares the connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// No request timeout; a turn waits as long as the service takes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails with [`HttpError::Timeout`] after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    fn classify(err: reqwest::Error) -> HttpError {
        let msg = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(msg)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(msg)
        } else if err.is_builder() {
            HttpError::InvalidUrl(msg)
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(msg)
        } else {
            HttpError::Other(msg)
        }
    }

    async fn exchange(&self, request: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let reply = request.send().await.map_err(Self::classify)?;
        let status = reply.status().as_u16();
        let body = reply.bytes().await.map_err(Self::classify)?;
        Ok(Response::new(status, body))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.exchange(self.client.get(url)).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<Response, HttpError> {
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body.to_string());
        self.exchange(request).await
    }
}
