//! Pagination types
//!
//! List query options, the page envelope returned by list endpoints, and the
//! collection assembled from several pages.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

/// Query parameter carrying the forward cursor
pub const STARTING_AFTER: &str = "starting_after";

/// Query parameter carrying the backward cursor
pub const ENDING_BEFORE: &str = "ending_before";

/// Base used to resolve relative pagination links such as `/v1/rules?...`
const LINK_BASE: &str = "http://localhost/";

// ============================================================================
// List Options
// ============================================================================

/// Options for a list request.
///
/// Empty strings and a zero limit count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Return records after this cursor
    pub starting_after: Option<String>,
    /// Return records before this cursor
    pub ending_before: Option<String>,
    /// Filter on source URL (`sq`)
    pub source_filter: Option<String>,
    /// Filter on target URL (`tq`)
    pub target_filter: Option<String>,
    /// Page size
    pub limit: Option<u32>,
}

impl ListOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forward cursor
    #[must_use]
    pub fn with_starting_after(mut self, cursor: impl Into<String>) -> Self {
        self.starting_after = Some(cursor.into());
        self
    }

    /// Set the backward cursor
    #[must_use]
    pub fn with_ending_before(mut self, cursor: impl Into<String>) -> Self {
        self.ending_before = Some(cursor.into());
        self
    }

    /// Set the source filter
    #[must_use]
    pub fn with_source_filter(mut self, filter: impl Into<String>) -> Self {
        self.source_filter = Some(filter.into());
        self
    }

    /// Set the target filter
    #[must_use]
    pub fn with_target_filter(mut self, filter: impl Into<String>) -> Self {
        self.target_filter = Some(filter.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Active query parameters in wire order:
    /// `starting_after`, `ending_before`, `sq`, `tq`, `limit`
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = [
            (STARTING_AFTER, &self.starting_after),
            (ENDING_BEFORE, &self.ending_before),
            ("sq", &self.source_filter),
            ("tq", &self.target_filter),
        ];

        let mut pairs: Vec<(&'static str, String)> = text
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (name, v.to_string()))
            })
            .collect();

        if let Some(limit) = self.limit.filter(|l| *l != 0) {
            pairs.push(("limit", limit.to_string()));
        }

        pairs
    }

    /// Append the active parameters to `path`.
    ///
    /// Returns `path` unchanged when no option is set.
    pub fn to_path_query(&self, path: &str) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return path.to_string();
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &pairs {
            query.append_pair(name, value);
        }
        format!("{path}?{}", query.finish())
    }
}

// ============================================================================
// Page Envelope
// ============================================================================

/// Pagination metadata of a list response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub has_more: bool,
}

/// Navigation links of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

impl Links {
    /// Extract the forward cursor from the `next` link.
    ///
    /// The link may be relative (`/v1/rules?starting_after=abc`) or absolute
    /// and may carry other parameters. A missing link, a link that does not
    /// parse, or one without a non-empty `starting_after` is a protocol error.
    pub fn next_cursor(&self) -> Result<String> {
        let next = self
            .next
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::protocol("has_more is set but links.next is missing"))?;

        let url = Url::parse(LINK_BASE)?
            .join(next)
            .map_err(|e| Error::protocol(format!("malformed next link {next:?}: {e}")))?;

        url.query_pairs()
            .find(|(name, _)| name == STARTING_AFTER)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::protocol(format!("next link {next:?} has no {STARTING_AFTER}")))
    }
}

/// One list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Metadata,
    #[serde(default)]
    pub links: Links,
}

impl<T> Page<T> {
    /// Create a page with the given records and no continuation
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            meta: Metadata::default(),
            links: Links::default(),
        }
    }

    /// Whether the server reported further pages
    pub fn has_more(&self) -> bool {
        self.meta.has_more
    }

    /// Options for the page after this one, or `None` on the last page.
    ///
    /// Only `starting_after` changes; every other option is kept.
    pub fn next_options(&self, options: &ListOptions) -> Result<Option<ListOptions>> {
        if !self.has_more() {
            return Ok(None);
        }
        let cursor = self.links.next_cursor()?;
        Ok(Some(options.clone().with_starting_after(cursor)))
    }
}

// ============================================================================
// Collection
// ============================================================================

/// Records from every page of a list, in fetch order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
    /// Metadata of the last page fetched
    pub meta: Metadata,
    /// Links of the last page fetched
    pub links: Links,
    /// Number of pages fetched
    #[serde(skip)]
    pub pages: usize,
}

impl<T> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            meta: Metadata::default(),
            links: Links::default(),
            pages: 0,
        }
    }

    /// Append a page's records, keeping their order
    pub fn push_page(&mut self, page: Page<T>) {
        self.data.extend(page.data);
        self.meta = page.meta;
        self.links = page.links;
        self.pages += 1;
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Page<T>> for Collection<T> {
    fn from(page: Page<T>) -> Self {
        let mut collection = Self::new();
        collection.push_page(page);
        collection
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
