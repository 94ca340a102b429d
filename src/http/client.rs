//! HTTP client for the EasyRedir API
//!
//! Provides the production [`Transport`]:
//! - Basic authentication from the configured credentials
//! - JSON media type on `Content-Type` and `Accept`
//! - Idempotency keys for mutating requests
//! - Response classification into an [`Outcome`]

use super::outcome::Outcome;
use super::request::ApiRequest;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{IDEMPOTENCY_HEADER, JSON_MEDIA_TYPE};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Sends one request and returns the success body.
///
/// API errors and rate limits come back as [`Error::Api`] and
/// [`Error::RateLimited`]. Implementations perform exactly one call and never
/// retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the body of a successful response
    async fn send(&self, request: ApiRequest) -> Result<Bytes>;
}

/// Send a request and decode the success body as JSON.
///
/// `what` names the payload in decode errors.
pub async fn send_json<R: DeserializeOwned>(
    transport: &(impl Transport + ?Sized),
    request: ApiRequest,
    what: &str,
) -> Result<R> {
    let body = transport.send(request).await?;
    serde_json::from_slice(&body)
        .map_err(|e| Error::decode(format!("unable to decode {what}: {e}")))
}

/// HTTP client holding immutable configuration.
///
/// Safe to share across tasks; nothing is mutated after construction.
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and classify the response
    pub async fn execute(&self, request: ApiRequest) -> Result<Outcome> {
        let url = self.build_url(&request.path)?;
        let timeout = request.timeout.unwrap_or(self.config.timeout);

        let mut req = self
            .client
            .request(request.method.into(), url.clone())
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .timeout(timeout);

        req = self.config.credentials.apply(req);

        if request.method.is_mutating() {
            let key = request
                .idempotency_key
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            req = req.header(IDEMPOTENCY_HEADER, key);
        }

        if let Some(ref body) = request.body {
            req = req.body(serde_json::to_vec(body)?);
        }

        debug!("Sending request: {} {}", request.method, url);

        let response = req
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;
        let status = response.status();

        let outcome = Outcome::read(response).await.map_err(|e| match e {
            Error::Http(e) => transport_error(e, timeout),
            other => other,
        })?;

        match &outcome {
            Outcome::Success(_) => debug!("Request succeeded: {} {}", request.method, url),
            Outcome::Api(err) => debug!(
                "Request rejected with {}: {} {}: {}",
                status.as_u16(),
                request.method,
                url,
                err
            ),
            Outcome::RateLimited(err) => warn!("{} {}: {}", request.method, url, err),
        }

        Ok(outcome)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<Bytes> {
        self.execute(request).await?.into_body()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Map a reqwest failure, separating deadline expiry from other errors
fn transport_error(e: reqwest::Error, timeout: Duration) -> Error {
    if e.is_timeout() {
        return Error::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        };
    }
    Error::Http(e)
}
