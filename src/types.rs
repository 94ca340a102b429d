//! Common types used throughout the client
//!
//! Shared type definitions and constants used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Constants
// ============================================================================

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.easyredir.com/v1";

/// Media type used for both `Content-Type` and `Accept`
pub const JSON_MEDIA_TYPE: &str = "application/json; charset=utf-8";

/// Header carrying the per-request idempotency token
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl Method {
    /// Whether requests with this method change server state and therefore
    /// carry an idempotency token
    pub fn is_mutating(self) -> bool {
        matches!(self, Method::POST | Method::PUT | Method::PATCH)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        };
        f.write_str(name)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Resource Envelope
// ============================================================================

/// Body shape of single-resource requests and responses: `{"data": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Render a value as a YAML mapping
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Build `/{collection}/{id}`, rejecting ids that would change the path
pub fn resource_path(collection: &str, id: &str) -> Result<String> {
    if id.is_empty() {
        return Err(Error::invalid_request(format!("{collection}: id is empty")));
    }
    if id.contains(['/', '?', '#', '%']) || id.chars().any(char::is_whitespace) {
        return Err(Error::invalid_request(format!(
            "{collection}: invalid id {id:?}"
        )));
    }
    Ok(format!("/{collection}/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_methods() {
        assert!(Method::POST.is_mutating());
        assert!(Method::PUT.is_mutating());
        assert!(Method::PATCH.is_mutating());
        assert!(!Method::GET.is_mutating());
        assert!(!Method::DELETE.is_mutating());
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::PATCH), reqwest::Method::PATCH);
        assert_eq!(Method::default().to_string(), "GET");
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(
            resource_path("rules", "abc-def").unwrap(),
            "/rules/abc-def"
        );
        assert!(matches!(
            resource_path("rules", ""),
            Err(Error::InvalidRequest { .. })
        ));
        assert!(resource_path("hosts", "../rules").is_err());
        assert!(resource_path("hosts", "abc?x=1").is_err());
        assert!(resource_path("hosts", "a b").is_err());
    }
}
