//! HTTP transport module
//!
//! Turns an [`ApiRequest`] into exactly one [`Outcome`].
//!
//! # Features
//!
//! - **Authentication**: Basic auth from the client credentials on every request
//! - **Idempotency**: Fresh `Idempotency-Key` on POST, PUT and PATCH
//! - **Classification**: Success body, decoded API error, or rate limit signal
//! - **Deadlines**: Client-wide timeout, overridable per request
//!
//! No retries happen here. A rate limit is surfaced to the caller as a
//! distinct error so it can apply its own backoff.

mod client;
mod outcome;
mod request;

pub use client::{send_json, HttpClient, Transport};
pub use outcome::Outcome;
pub use request::ApiRequest;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
