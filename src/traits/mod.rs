//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport used to reach the dialogue service

pub mod http;

pub use http::{HttpClient, HttpError, Response};
