//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("eventregistry-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://eventregistry.org")
        .timeout(Duration::from_secs(10))
        .rate_limit(RateLimiterConfig::new(2, 4))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://eventregistry.org".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(2, 4)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");

    let config = HttpClientConfig::builder()
        .rate_limit(RateLimiterConfig::default())
        .no_rate_limit()
        .build();
    assert!(config.rate_limit.is_none());
}

#[tokio::test]
async fn test_post_json_sends_body_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/json/event"))
        .and(header("X-Custom", "value"))
        .and(body_json(json!({"action": "getEvents"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": {"results": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .header("X-Custom", "value")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .post_json("/json/event", &json!({"action": "getEvents"}))
        .await
        .unwrap();
    assert_eq!(response, json!({"events": {"results": []}}));
}

#[tokio::test]
async fn test_rate_limited_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .post_json("/json/article", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RateLimited));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .post_json("/json/article", &json!({}))
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test_case("" ; "no trailing slash")]
#[test_case("/" ; "trailing slash")]
#[tokio::test]
async fn test_base_url_path_prefix_is_kept(suffix: &str) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/er/json/event"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/er{suffix}", server.uri()))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client.post_json("/json/event", &json!({})).await.unwrap();
    assert_eq!(response, json!({"ok": true}));
}

#[tokio::test]
async fn test_relative_path_without_base_url() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let err = client.post_json("/json/event", &json!({})).await.unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_rate_limiter_allows_burst() {
    let limiter = RateLimiter::new(&RateLimiterConfig::new(10, 5));
    for _ in 0..5 {
        assert!(limiter.try_acquire());
    }
    assert!(!limiter.try_acquire());
}

#[tokio::test]
async fn test_client_with_rate_limiter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .rate_limit(RateLimiterConfig::new(100, 10))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert!(client.has_rate_limiter());

    client.post_json("/json/event", &json!({})).await.unwrap();
    client.post_json("/json/event", &json!({})).await.unwrap();
}

#[test]
fn test_rate_limiter_config_deserializes_with_defaults() {
    let config: RateLimiterConfig = serde_yaml::from_str("requests_per_second: 2").unwrap();
    assert_eq!(config.requests_per_second, 2);
    assert_eq!(config.burst_size, RateLimiterConfig::default().burst_size);
}
