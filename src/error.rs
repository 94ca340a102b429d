//! Error types for the EasyRedir client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Two failure shapes reported by the API itself are standalone types as well:
//! [`ApiErrors`] (a decoded error body) and [`RateLimitError`] (a 429 response).
//! Both are carried by [`Error`] so callers can match on them without parsing
//! message text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// API Error Body
// ============================================================================

/// A structured error returned by the API in a non-2xx response body
///
/// `type` is required. A body without it (such as `{}`) does not decode, and
/// the response surfaces as [`Error::HttpStatus`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    /// Short error category (e.g. `invalid_request_error`)
    #[serde(rename = "type")]
    pub error_type: String,

    /// Human readable summary
    #[serde(default)]
    pub message: String,

    /// Field level details, in the order the server reported them
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.error_type)
        } else {
            write!(f, "{}: {}", self.error_type, self.message)
        }
    }
}

impl std::error::Error for ApiErrors {}

/// One field level entry of an [`ApiErrors`] body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub param: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Rate Limit
// ============================================================================

/// Rate limit details taken from the `X-Ratelimit-*` response headers.
///
/// Values are kept verbatim; their format is defined by the server.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("rate limited with limit: {limit}, remaining: {remaining}, reset: {reset}")]
pub struct RateLimitError {
    pub limit: String,
    pub remaining: String,
    pub reset: String,
}

impl RateLimitError {
    /// Header carrying the request quota
    pub const LIMIT_HEADER: &'static str = "X-Ratelimit-Limit";
    /// Header carrying the requests left in the current window
    pub const REMAINING_HEADER: &'static str = "X-Ratelimit-Remaining";
    /// Header carrying the window reset marker
    pub const RESET_HEADER: &'static str = "X-Ratelimit-Reset";

    /// Read the rate limit headers, using empty strings for missing values
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };

        Self {
            limit: get(Self::LIMIT_HEADER),
            remaining: get(Self::REMAINING_HEADER),
            reset: get(Self::RESET_HEADER),
        }
    }
}

// ============================================================================
// Crate Error
// ============================================================================

/// The main error type for the EasyRedir client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("received status code: {status}")]
    HttpStatus { status: u16, body: String },

    #[error(transparent)]
    Api(#[from] ApiErrors),

    #[error(transparent)]
    RateLimited(#[from] RateLimitError),

    // ============================================================================
    // Decode / Protocol Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    YamlRender(#[from] serde_yaml::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Protocol error: {message}")]
    Protocol { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("unable to get page {page}: {source}")]
    Page {
        page: usize,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Wrap an error with the 1-based index of the page that produced it
    pub fn page(page: usize, source: Error) -> Self {
        Self::Page {
            page,
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through pagination context
    pub fn root(&self) -> &Error {
        match self {
            Error::Page { source, .. } => source.root(),
            other => other,
        }
    }

    /// Rate limit details if this error is a rate limit signal
    pub fn rate_limit(&self) -> Option<&RateLimitError> {
        match self.root() {
            Error::RateLimited(err) => Some(err),
            _ => None,
        }
    }

    /// The decoded API error body if the server rejected the request
    pub fn api_error(&self) -> Option<&ApiErrors> {
        match self.root() {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error is a rate limit signal
    pub fn is_rate_limited(&self) -> bool {
        self.rate_limit().is_some()
    }

    /// Check if this error is retryable.
    ///
    /// The client never retries on its own; this is for callers running their
    /// own policy.
    pub fn is_retryable(&self) -> bool {
        match self.root() {
            Error::RateLimited(_) | Error::Timeout { .. } => true,
            Error::Http(e) => e.is_connect() || e.is_timeout(),
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the EasyRedir client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
