//! Tests for the HTTP transport module

use super::*;
use crate::config::ClientConfig;
use crate::error::{Error, RateLimitError};
use crate::types::Method;
use base64::Engine;
use bytes::Bytes;
use pretty_assertions::assert_eq;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/v1", server.uri()))
        .credentials("key", "secret")
        .build();
    HttpClient::new(config).unwrap()
}

fn error_body() -> serde_json::Value {
    json!({
        "type": "invalid_request_error",
        "message": "Invalid parameters",
        "errors": [
            {
                "resource": "rule",
                "param": "target_url",
                "code": "blank",
                "message": "can't be blank"
            }
        ]
    })
}

// ============================================================================
// ApiRequest Tests
// ============================================================================

#[test]
fn test_api_request_builder() {
    let req = ApiRequest::post("/rules", json!({"a": 1}))
        .timeout(Duration::from_secs(5))
        .idempotency_key("fixed");

    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/rules");
    assert_eq!(req.body, Some(json!({"a": 1})));
    assert_eq!(req.timeout, Some(Duration::from_secs(5)));
    assert_eq!(req.idempotency_key.as_deref(), Some("fixed"));

    let req = ApiRequest::get("/hosts/abc");
    assert_eq!(req.method, Method::GET);
    assert!(req.body.is_none());
}

// ============================================================================
// Outcome Classification Tests
// ============================================================================

#[test]
fn test_outcome_success_range() {
    for status in [200, 201, 204, 302, 399] {
        let outcome = Outcome::from_parts(
            StatusCode::from_u16(status).unwrap(),
            &HeaderMap::new(),
            Bytes::from_static(b"{}"),
        )
        .unwrap();
        assert!(
            matches!(outcome, Outcome::Success(_)),
            "status {status} should be a success"
        );
    }
}

#[test]
fn test_outcome_rate_limit_ignores_body() {
    let mut headers = HeaderMap::new();
    headers.insert("X-Ratelimit-Limit", "100".parse().unwrap());
    headers.insert("X-Ratelimit-Remaining", "0".parse().unwrap());
    headers.insert("X-Ratelimit-Reset", "30".parse().unwrap());

    let body = Bytes::from(error_body().to_string());
    let outcome = Outcome::from_parts(StatusCode::TOO_MANY_REQUESTS, &headers, body).unwrap();

    assert_eq!(
        outcome,
        Outcome::RateLimited(RateLimitError {
            limit: "100".to_string(),
            remaining: "0".to_string(),
            reset: "30".to_string(),
        })
    );
}

#[test]
fn test_outcome_api_error() {
    let body = Bytes::from(error_body().to_string());
    let outcome = Outcome::from_parts(StatusCode::BAD_REQUEST, &HeaderMap::new(), body).unwrap();

    match outcome {
        Outcome::Api(err) => {
            assert_eq!(err.error_type, "invalid_request_error");
            assert_eq!(err.message, "Invalid parameters");
            assert_eq!(err.errors[0].resource, "rule");
        }
        other => panic!("Expected Api outcome, got {other:?}"),
    }
}

#[test]
fn test_outcome_malformed_error_body() {
    for (status, body) in [(500, "notjson"), (404, "{}"), (199, "")] {
        let result = Outcome::from_parts(
            StatusCode::from_u16(status).unwrap(),
            &HeaderMap::new(),
            Bytes::from_static(body.as_bytes()),
        );
        match result {
            Err(Error::HttpStatus { status: got, body: raw }) => {
                assert_eq!(got, status);
                assert_eq!(raw, body);
            }
            other => panic!("Expected HttpStatus error, got {other:?}"),
        }
    }
}

#[test]
fn test_outcome_into_body() {
    let body = Outcome::Success(Bytes::from_static(b"ok")).into_body().unwrap();
    assert_eq!(body, Bytes::from_static(b"ok"));

    let err = Outcome::RateLimited(RateLimitError::default())
        .into_body()
        .unwrap_err();
    assert!(err.is_rate_limited());
}

// ============================================================================
// HttpClient Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_auth_and_media_type() {
    let mock_server = MockServer::start().await;
    let expected_auth = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("key:secret")
    );

    Mock::given(method("GET"))
        .and(path("/v1/rules"))
        .and(query_param("limit", "10"))
        .and(header("Authorization", expected_auth.as_str()))
        .and(header("Content-Type", "application/json; charset=utf-8"))
        .and(header("Accept", "application/json; charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.send(ApiRequest::get("/rules?limit=10")).await.unwrap();

    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"data": []}));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("Idempotency-Key").is_none());
}

#[tokio::test]
async fn test_mutating_requests_get_fresh_idempotency_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rules"))
        .and(body_json(json!({"name": "test"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    for _ in 0..2 {
        client
            .send(ApiRequest::post("/rules", json!({"name": "test"})))
            .await
            .unwrap();
    }

    let requests = mock_server.received_requests().await.unwrap();
    let keys: Vec<String> = requests
        .iter()
        .map(|r| {
            r.headers
                .get("Idempotency-Key")
                .expect("missing idempotency key")
                .to_str()
                .unwrap()
                .to_string()
        })
        .collect();

    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
    assert!(keys.iter().all(|k| uuid::Uuid::parse_str(k).is_ok()));
}

#[tokio::test]
async fn test_pinned_idempotency_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/rules/abc"))
        .and(header("Idempotency-Key", "retry-safe-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ApiRequest::patch("/rules/abc", json!({})).idempotency_key("retry-safe-key");
    client.send(request).await.unwrap();
}

#[tokio::test]
async fn test_delete_has_no_idempotency_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/rules/abc"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.send(ApiRequest::delete("/rules/abc")).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("Idempotency-Key").is_none());
}

#[tokio::test]
async fn test_rate_limit_takes_precedence_over_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rules"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("X-Ratelimit-Limit", "100")
                .insert_header("X-Ratelimit-Remaining", "0")
                .insert_header("X-Ratelimit-Reset", "1700000000")
                .set_body_json(error_body()),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let outcome = client.execute(ApiRequest::get("/rules")).await.unwrap();
    assert_eq!(
        outcome,
        Outcome::RateLimited(RateLimitError {
            limit: "100".to_string(),
            remaining: "0".to_string(),
            reset: "1700000000".to_string(),
        })
    );

    let err = client.send(ApiRequest::get("/rules")).await.unwrap_err();
    assert!(matches!(err, Error::RateLimited(_)));
    assert_eq!(
        err.to_string(),
        "rate limited with limit: 100, remaining: 0, reset: 1700000000"
    );
}

#[tokio::test]
async fn test_api_error_body_is_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/rules"))
        .respond_with(ResponseTemplate::new(422).set_body_json(error_body()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .send(ApiRequest::post("/rules", json!({})))
        .await
        .unwrap_err();

    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.error_type, "invalid_request_error");
    assert_eq!(api.errors[0].param, "target_url");
    assert_eq!(err.to_string(), "invalid_request_error: Invalid parameters");
}

#[tokio::test]
async fn test_malformed_error_body_falls_back_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rules"))
        .respond_with(ResponseTemplate::new(500).set_body_string("notjson"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.send(ApiRequest::get("/rules")).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert!(err.api_error().is_none());
    assert_eq!(err.to_string(), "received status code: 500");
}

#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .send(ApiRequest::get("/slow").timeout(Duration::from_millis(50)))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_invalid_base_url() {
    let config = ClientConfig::builder()
        .base_url("not a url")
        .credentials("key", "secret")
        .build();
    let client = HttpClient::new(config).unwrap();

    let err = client.send(ApiRequest::get("/rules")).await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_send_json_decode_error_names_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/hosts/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("notjson"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: crate::Result<serde_json::Value> =
        send_json(&client, ApiRequest::get("/hosts/abc"), "host").await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("unable to decode host"));
}
