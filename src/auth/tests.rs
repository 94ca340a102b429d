//! Tests for the auth module

use super::*;
use base64::Engine;

#[test]
fn test_basic_auth_header() {
    let credentials = Credentials::new("my-key", "my-secret");

    let client = reqwest::Client::new();
    let req = credentials.apply(client.get("https://example.com/v1/rules"));

    // Build the request to inspect headers
    let built = req.build().unwrap();
    let expected = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("my-key:my-secret")
    );
    assert_eq!(built.headers().get("Authorization").unwrap(), &expected);
}

#[test]
fn test_debug_redacts_secret() {
    let credentials = Credentials::new("my-key", "my-secret");
    let debug = format!("{credentials:?}");

    assert!(debug.contains("my-key"));
    assert!(!debug.contains("my-secret"));
    assert!(debug.contains("<redacted>"));
}
