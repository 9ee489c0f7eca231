mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use linkservice::api::handlers::{create_link_handler, resolve_link_handler};
use linkservice::state::AppState;
use linkservice::utils::validator::Validator;
use serde_json::json;
use std::sync::Arc;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", post(create_link_handler))
        .route("/api/links/{code}", get(resolve_link_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_link_success() {
    let (state, _repo) = common::create_memory_state();
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://golang.org/" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert!(Validator::new().unwrap().validate_code(code));
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (state, repo) = common::create_memory_state();
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "this is not a URL" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_link_empty_url() {
    let (state, _repo) = common::create_memory_state();
    let server = test_server(state);

    let response = server.post("/api/links").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_create_link_missing_url_field() {
    let (state, repo) = common::create_memory_state();
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "link": "https://golang.org/" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
    assert!(json["error"]["details"]["body"].is_string());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_link_non_json_body() {
    let (state, repo) = common::create_memory_state();
    let server = test_server(state);

    let response = server.post("/api/links").text("https://golang.org/").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_link_too_long_url() {
    let (state, repo) = common::create_memory_state();
    let server = test_server(state);

    let url = format!("https://example.com/{}", "a".repeat(2048));
    let response = server.post("/api/links").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_link_deduplication() {
    let (state, repo) = common::create_memory_state();
    let server = test_server(state);

    let first = server
        .post("/api/links")
        .json(&json!({ "url": "http://abc.abc/" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/links")
        .json(&json!({ "url": "http://abc.abc/" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["code"], second["code"]);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_codes() {
    let (state, _repo) = common::create_memory_state();
    let server = test_server(state);

    let mut codes = Vec::new();
    for url in [
        "http://abc.abc/",
        "http://archive.org/filename.txt",
        "http://qwerty.bca/",
    ] {
        let json = server
            .post("/api/links")
            .json(&json!({ "url": url }))
            .await
            .json::<serde_json::Value>();
        codes.push(json["code"].as_str().unwrap().to_string());
    }

    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 3);
}

#[tokio::test]
async fn test_create_then_resolve() {
    let (state, _repo) = common::create_memory_state();
    let server = test_server(state);

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/search?q=rust#top" }))
        .await
        .json::<serde_json::Value>();
    let code = created["code"].as_str().unwrap();

    let response = server.get(&format!("/api/links/{code}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com/search?q=rust#top");
}

#[tokio::test]
async fn test_resolve_unknown_code() {
    let (state, _repo) = common::create_memory_state();
    let server = test_server(state);

    let response = server.get("/api/links/123_abcABC").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_resolve_invalid_code() {
    let (state, _repo) = common::create_memory_state();
    let server = test_server(state);

    let response = server.get("/api/links/abc-123").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_store_failure_is_opaque() {
    let state = common::create_test_state(Arc::new(common::UnavailableRepository));
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://golang.org/" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "request_processing_failed");
    assert_eq!(json["error"]["details"], json!({}));
}

#[tokio::test]
async fn test_resolve_store_failure() {
    let state = common::create_test_state(Arc::new(common::UnavailableRepository));
    let server = test_server(state);

    let response = server.get("/api/links/123_abcABC").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
