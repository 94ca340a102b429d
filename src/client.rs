//! EasyRedir API client
//!
//! Entry point of the library. Owns one [`Transport`] and hands out the
//! resource accessors that borrow it.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::hosts::Hosts;
use crate::http::{HttpClient, Transport};
use crate::rules::Rules;

/// API client
///
/// ```rust,ignore
/// use easyredir::{ClientConfig, EasyRedir, ListOptions};
///
/// let config = ClientConfig::builder().credentials("key", "secret").build();
/// let client = EasyRedir::new(config)?;
/// let rules = client.rules().list(&ListOptions::new()).await?;
/// ```
pub struct EasyRedir<T = HttpClient> {
    transport: T,
}

impl EasyRedir<HttpClient> {
    /// Create a client that talks to the API described by `config`
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport: HttpClient::new(config)?,
        })
    }
}

impl<T: Transport> EasyRedir<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Redirect rules
    pub fn rules(&self) -> Rules<'_, T> {
        Rules::new(&self.transport)
    }

    /// Source hosts
    pub fn hosts(&self) -> Hosts<'_, T> {
        Hosts::new(&self.transport)
    }

    /// Liveness check of the client itself; does not contact the API
    pub fn ping(&self) -> &'static str {
        "pong"
    }
}
