//! Authentication module
//!
//! The API uses HTTP Basic authentication with an API key and secret. The
//! `Credentials` value is immutable once built and is applied to every
//! outgoing request by the transport.

mod credentials;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};

#[cfg(test)]
mod tests;
