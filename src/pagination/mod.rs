//! Pagination module
//!
//! Cursor based pagination over `starting_after`.
//!
//! # Overview
//!
//! A list endpoint returns a [`Page`] with `meta.has_more` and a `links.next`
//! URL whose `starting_after` parameter names the next cursor. The
//! [`Paginator`] follows those cursors one page at a time, strictly in order,
//! and concatenates the records into a [`Collection`]. Any [`PageSource`] can
//! be paginated; resource accessors implement it and tests substitute canned
//! pages.

mod paginator;
mod types;

pub use paginator::{paginate, PageSource, Paginator};
pub use types::{Collection, Links, ListOptions, Metadata, Page, STARTING_AFTER};
