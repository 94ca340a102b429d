//! Host payloads

use crate::error::Result;
use crate::types::to_yaml;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A source host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default, skip_serializing_if = "HostAttributes::is_empty")]
    pub attributes: HostAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostAttributes {
    /// Domain name, e.g. `www.example.org`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// e.g. `active`, `pending`, `misconfigured`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_tested_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acme_enabled: Option<bool>,
}

impl HostAttributes {
    /// Check if no attribute is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Host {
    /// Render as a YAML mapping
    pub fn to_yaml(&self) -> Result<String> {
        to_yaml(self)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yaml = self.to_yaml().map_err(|_| fmt::Error)?;
        f.write_str(&yaml)
    }
}
