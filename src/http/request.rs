//! Request descriptor

use crate::types::{JsonValue, Method};
use std::time::Duration;

/// A single API call, relative to the client's base URL.
///
/// Built per call and consumed by the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path plus query string, e.g. `/rules?limit=10`
    pub path: String,
    /// JSON body
    pub body: Option<JsonValue>,
    /// Override the client timeout for this request
    pub timeout: Option<Duration>,
    /// Pin the idempotency key instead of generating a fresh one.
    ///
    /// Only meaningful for mutating methods. Reuse a key when retrying an
    /// operation that may already have been applied.
    pub idempotency_key: Option<String>,
}

impl ApiRequest {
    /// Create a request with the given method and path
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request with a JSON body
    pub fn post(path: impl Into<String>, body: JsonValue) -> Self {
        Self::new(Method::POST, path).json(body)
    }

    /// PUT request with a JSON body
    pub fn put(path: impl Into<String>, body: JsonValue) -> Self {
        Self::new(Method::PUT, path).json(body)
    }

    /// PATCH request with a JSON body
    pub fn patch(path: impl Into<String>, body: JsonValue) -> Self {
        Self::new(Method::PATCH, path).json(body)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pin the idempotency key
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }
}
