//! Integration tests for the Supabase fetcher against a mock backend

mod common;

use athleto_pathway::{ErrorCode, SupabaseClient, Table, TableResponse};
use axum::http::Version;
use common::{config_for, MockBackend, TEST_KEY};
use serde_json::json;
use tokio::net::TcpListener;

#[tokio::test]
async fn test_athletes_returned_verbatim_on_200() {
    let backend = MockBackend::start(200, r#"[{"id":1,"name":"Jane"}]"#).await;

    let athletes = backend.client().fetch_athlete_data().await.unwrap();

    assert_eq!(athletes, json!([{"id": 1, "name": "Jane"}]));
}

#[tokio::test]
async fn test_sponsorships_returned_verbatim_on_200() {
    let body = r#"[{"id":"sp-1","brand":"Acme","amount":5000,"perks":["kit","travel"]}]"#;
    let backend = MockBackend::start(200, body).await;

    let sponsorships = backend.client().fetch_sponsorships().await.unwrap();

    assert_eq!(sponsorships, serde_json::from_str::<serde_json::Value>(body).unwrap());
}

#[tokio::test]
async fn test_object_body_passes_through() {
    let backend = MockBackend::start(200, r#"{"message":"not a list"}"#).await;

    let athletes = backend.client().fetch_athlete_data().await.unwrap();

    assert_eq!(athletes, json!({"message": "not a list"}));
}

#[tokio::test]
async fn test_non_200_collapses_to_empty_list() {
    for status in [201, 401, 404, 500] {
        let backend = MockBackend::start(status, r#"{"message":"nope"}"#).await;
        let client = backend.client();

        assert_eq!(client.fetch_athlete_data().await.unwrap(), json!([]), "status {}", status);
        assert_eq!(client.fetch_sponsorships().await.unwrap(), json!([]), "status {}", status);
    }
}

#[tokio::test]
async fn test_server_error_on_sponsorships_returns_empty() {
    let backend = MockBackend::start(500, "internal error").await;

    let sponsorships = backend.client().fetch_sponsorships().await.unwrap();

    assert_eq!(sponsorships, json!([]));
}

#[tokio::test]
async fn test_fetch_table_keeps_status() {
    let backend = MockBackend::start(401, r#"{"message":"Invalid API key"}"#).await;

    let response = backend.client().fetch_table(Table::Athletes).await.unwrap();

    assert_eq!(response, TableResponse::Rejected { status: 401 });
}

#[tokio::test]
async fn test_request_paths() {
    let backend = MockBackend::start(200, "[]").await;
    let client = backend.client();

    client.fetch_athlete_data().await.unwrap();
    client.fetch_sponsorships().await.unwrap();

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/rest/v1/athletes", "/rest/v1/sponsorships"]);
}

#[tokio::test]
async fn test_auth_headers_carry_key() {
    let backend = MockBackend::start(200, "[]").await;
    let client = backend.client();

    client.fetch_athlete_data().await.unwrap();
    client.fetch_sponsorships().await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.apikey.as_deref(), Some(TEST_KEY));
        assert_eq!(request.authorization.as_deref(), Some("Bearer abc123"));
    }
}

#[tokio::test]
async fn test_requests_use_http1() {
    let backend = MockBackend::start(200, "[]").await;
    let client = backend.client();

    client.fetch_athlete_data().await.unwrap();
    client.fetch_sponsorships().await.unwrap();

    for request in backend.requests() {
        assert_eq!(request.version, Version::HTTP_11);
    }
}

#[tokio::test]
async fn test_invalid_json_on_200_is_error() {
    let backend = MockBackend::start(200, "<html>oops</html>").await;

    let err = backend.client().fetch_athlete_data().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidResponse);
}

#[tokio::test]
async fn test_connection_refused_is_error() {
    // Reserve a port, then free it so nothing is listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SupabaseClient::new(&config_for(&format!("http://{}", addr))).unwrap();
    let err = client.fetch_sponsorships().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::HttpConnectionFailed);
}
