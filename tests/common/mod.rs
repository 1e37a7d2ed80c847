#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use url_shortener::application::services::{AllocationPolicy, LinkService};
use url_shortener::infrastructure::db;
use url_shortener::infrastructure::persistence::SqliteLinkRepository;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

pub async fn create_test_pool() -> SqlitePool {
    db::connect_in_memory().await.unwrap()
}

pub fn create_test_service(pool: SqlitePool) -> LinkService<SqliteLinkRepository> {
    LinkService::new(
        Arc::new(SqliteLinkRepository::new(pool)),
        AllocationPolicy::default(),
    )
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(create_test_service(pool)),
        Some(BASE_URL.to_string()),
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = url_shortener::api::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (original_url, short_code) VALUES (?, ?) RETURNING id")
        .bind(url)
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
