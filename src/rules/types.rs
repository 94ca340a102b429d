//! Rule payloads

use crate::error::Result;
use crate::types::to_yaml;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A redirect rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default, skip_serializing_if = "RuleAttributes::is_empty")]
    pub attributes: RuleAttributes,
}

/// Rule settings. Attributes the server omitted stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleAttributes {
    /// Pass the source query string on to the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_params: Option<bool>,

    /// Pass the source path on to the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_path: Option<bool>,

    /// e.g. `moved_permanently` or `found`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_urls: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

impl RuleAttributes {
    /// Check if no attribute is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Rule {
    /// Render as a YAML mapping
    pub fn to_yaml(&self) -> Result<String> {
        to_yaml(self)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yaml = self.to_yaml().map_err(|_| fmt::Error)?;
        f.write_str(&yaml)
    }
}
