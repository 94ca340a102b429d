//! Client configuration
//!
//! The configuration is built once and never mutated afterwards. The base URL
//! is injected here rather than read from a process-wide constant, which lets
//! tests point the client at a mock server.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::types::DEFAULT_BASE_URL;
use std::time::Duration;
use url::Url;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://api.easyredir.com/v1`
    pub base_url: String,
    /// Basic auth credentials sent with every request
    pub credentials: Credentials,
    /// Upper bound for a single request, connect to last body byte
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("easyredir-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Check that the config can produce requests
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL cannot be used as a base: {}",
                self.base_url
            )));
        }
        if self.credentials.key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.credentials.secret.is_empty() {
            return Err(Error::missing_field("api_secret"));
        }
        Ok(())
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API key and secret
    pub fn credentials(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.config.credentials = Credentials::new(key, secret);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
