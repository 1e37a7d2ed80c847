mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_info_success() {
    let pool = common::create_test_pool().await;
    let id = common::create_test_link(&pool, "abc123", "https://example.com").await;
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.get("/info/abc123").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["original_url"], "https://example.com");
    assert_eq!(body["short_code"], "abc123");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_info_not_found() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.get("/info/doesnotexist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["code"], "doesnotexist");
}

#[tokio::test]
async fn test_info_code_named_like_a_route() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "health", "https://example.com/health").await;
    let server = common::create_test_server(common::create_test_state(pool));

    let response = server.get("/info/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["original_url"], "https://example.com/health");
}
