//! # easyredir
//!
//! Client for the EasyRedir redirect-management REST API.
//!
//! ## Features
//!
//! - **Basic Auth**: API key and secret on every request
//! - **Idempotency**: Fresh `Idempotency-Key` on every mutating request
//! - **Typed Errors**: API error bodies and rate limits as distinct variants
//! - **Cursor Pagination**: Follows `starting_after` until the last page
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use easyredir::{ClientConfig, EasyRedir, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .credentials("key", "secret")
//!         .build();
//!     let client = EasyRedir::new(config)?;
//!
//!     let rules = client
//!         .rules()
//!         .list(&ListOptions::new().with_source_filter("example.org"))
//!         .await?;
//!     for rule in &rules {
//!         println!("{rule}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  EasyRedir                   │
//! │        rules()              hosts()          │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────┴───────────────────────┐
//! │       Paginator  ──►  PageSource             │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────┴───────────────────────┐
//! │  Transport: ApiRequest ──► Outcome           │
//! │  Basic auth │ Idempotency │ Classification   │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and constants
pub mod types;

/// Client configuration
pub mod config;

/// API credentials
pub mod auth;

/// HTTP transport
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Redirect rules endpoint
pub mod rules;

/// Hosts endpoint
pub mod hosts;

/// API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use client::EasyRedir;
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrors, Error, RateLimitError, Result};
pub use hosts::{Host, HostAttributes};
pub use http::{HttpClient, Transport};
pub use pagination::{Collection, ListOptions, Page};
pub use rules::{Rule, RuleAttributes};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
