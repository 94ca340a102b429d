//! API key / secret pair

use reqwest::RequestBuilder;
use std::fmt;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "EASYREDIR_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "EASYREDIR_API_SECRET";

/// Basic auth credentials
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// API key, sent as the basic auth username
    pub key: String,
    /// API secret, sent as the basic auth password
    pub secret: String,
}

impl Credentials {
    /// Create credentials from a key and secret
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Apply basic authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.basic_auth(&self.key, Some(&self.secret))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
