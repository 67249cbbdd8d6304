//! Tests for the HTTP transport module

use super::*;
use crate::config::ClientConfig;
use crate::error::{Error, TRUNCATION_MARKER};
use crate::query::Query;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .api_key("test-key")
        .user_agent("cfbd-test/1.0")
        .build();
    HttpClient::new(&config).unwrap()
}

#[test]
fn test_missing_api_key() {
    let config = ClientConfig::builder().build();
    assert!(matches!(
        HttpClient::new(&config),
        Err(Error::MissingApiKey)
    ));

    let config = ClientConfig::builder().api_key("   ").build();
    assert!(matches!(
        HttpClient::new(&config),
        Err(Error::MissingApiKey)
    ));
}

#[test]
fn test_build_url() {
    let config = ClientConfig::builder()
        .base_url("https://api.example.com/")
        .api_key("k")
        .build();
    let client = HttpClient::new(&config).unwrap();

    let mut query = Query::new();
    query.push_opt("year", Some(2023)).push_opt("team", Some("Texas A&M"));

    let url = client.build_url("/games", &query).unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.example.com/games?year=2023&team=Texas+A%26M"
    );

    let url = client.build_url("ratings/sp", &Query::new()).unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/ratings/sp");
}

#[tokio::test]
async fn test_get_sets_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", "cfbd-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client_for(&mock_server)
        .get("/teams", &Query::new())
        .await
        .unwrap();

    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn test_get_sends_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("year", "2023"))
        .and(query_param("week", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut query = Query::new();
    query.push_opt("year", Some(2023)).push_opt("week", Some(0));

    let result = client_for(&mock_server).get("/games", &query).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_returns_raw_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let body = client_for(&mock_server)
        .get("/info", &Query::new())
        .await
        .unwrap();
    assert_eq!(&body[..], b"null");
}

#[tokio::test]
async fn test_non_success_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get("/games", &Query::new())
        .await
        .unwrap_err();

    match err {
        Error::Api { status, path, body } => {
            assert_eq!(status, 404);
            assert_eq!(path, "/games");
            assert_eq!(body, r#"{"error":"not found"}"#);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_long_error_body_is_truncated() {
    let mock_server = MockServer::start().await;
    let long_body = "e".repeat(1000);

    Mock::given(method("GET"))
        .and(path("/lines"))
        .respond_with(ResponseTemplate::new(500).set_body_string(long_body))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get("/lines", &Query::new())
        .await
        .unwrap_err();

    assert!(err.is_server_error());
    let Error::Api { body, .. } = err else {
        panic!("expected API error");
    };
    assert_eq!(body, format!("{}{TRUNCATION_MARKER}", "e".repeat(400)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server)
        .with_options(RequestOptions::new().timeout(Duration::from_millis(100)));
    let err = client.get("/slow", &Query::new()).await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
}

#[tokio::test]
async fn test_cancellation_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let client = client_for(&mock_server)
        .with_options(RequestOptions::new().cancel_on(token.clone()));

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = client.get("/slow", &Query::new()).await.unwrap_err();
    canceller.await.unwrap();

    assert!(matches!(err, Error::Transport { source: None, .. }));
    assert!(err.to_string().contains("cancelled"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = ClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .api_key("k")
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::new(&config).unwrap();

    let err = client.get("/teams", &Query::new()).await.unwrap_err();
    assert!(matches!(err, Error::Transport { source: Some(_), .. }));
}
