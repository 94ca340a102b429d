//! Page following loop

use super::types::{Collection, ListOptions, Page};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// A list endpoint that can return one page at a time
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Record type of the list
    type Record: Send;

    /// Fetch the single page selected by `options`
    async fn fetch_page(&self, options: &ListOptions) -> Result<Page<Self::Record>>;
}

/// Follows `starting_after` cursors until the server reports no more pages.
///
/// Pages are fetched strictly one after another; page N+1 is requested only
/// once page N's cursor is known. A failure on any page discards the records
/// collected so far and is returned as [`Error::Page`] with the 1-based page
/// index.
pub struct Paginator<'a, S: ?Sized> {
    source: &'a S,
    max_pages: Option<usize>,
}

impl<'a, S: PageSource + ?Sized> Paginator<'a, S> {
    /// Create a paginator over `source`
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            max_pages: None,
        }
    }

    /// Fail instead of fetching more than `max` pages
    #[must_use]
    pub fn max_pages(mut self, max: usize) -> Self {
        self.max_pages = Some(max);
        self
    }

    /// Fetch every page starting from `options` and concatenate the records
    pub async fn collect(&self, options: &ListOptions) -> Result<Collection<S::Record>> {
        let mut collection = Collection::new();
        let mut current = options.clone();
        let mut page_number = 0;
        let mut seen: HashSet<String> = current.starting_after.iter().cloned().collect();

        loop {
            page_number += 1;
            if let Some(max) = self.max_pages {
                if page_number > max {
                    return Err(Error::page(
                        page_number,
                        Error::protocol(format!("exceeded the limit of {max} pages")),
                    ));
                }
            }

            let page = self
                .source
                .fetch_page(&current)
                .await
                .map_err(|e| Error::page(page_number, e))?;

            let next = page
                .next_options(options)
                .map_err(|e| Error::page(page_number, e))?;

            debug!(
                "Fetched page {} with {} records (has_more: {})",
                page_number,
                page.data.len(),
                page.has_more()
            );

            collection.push_page(page);

            let Some(next) = next else {
                break;
            };

            // Every cursor must be new, otherwise the same pages repeat forever
            let cursor = next.starting_after.clone().unwrap_or_default();
            if !seen.insert(cursor.clone()) {
                return Err(Error::page(
                    page_number,
                    Error::protocol(format!("next cursor {cursor:?} did not advance")),
                ));
            }
            current = next;
        }

        Ok(collection)
    }
}

/// Fetch every page of `source` starting from `options`
pub async fn paginate<S: PageSource + ?Sized>(
    source: &S,
    options: &ListOptions,
) -> Result<Collection<S::Record>> {
    Paginator::new(source).collect(options).await
}
