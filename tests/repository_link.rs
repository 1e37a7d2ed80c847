mod common;

use chrono::{Duration, Utc};
use url_shortener::domain::entities::NewLink;
use url_shortener::domain::errors::StoreError;
use url_shortener::domain::repositories::LinkRepository;
use url_shortener::infrastructure::persistence::SqliteLinkRepository;

#[tokio::test]
async fn test_insert_and_find() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    let link = repo
        .insert(NewLink::new("https://example.com/a?b=c#d", "abc123"))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.short_code, "abc123");
    assert_eq!(link.original_url, "https://example.com/a?b=c#d");
    assert!(link.created_at <= Utc::now() + Duration::seconds(1));
    assert!(link.created_at > Utc::now() - Duration::minutes(1));

    let found = repo.find("abc123").await.unwrap().unwrap();
    assert_eq!(found, link);
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    assert!(repo.find("nothing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_exists() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "taken1", "https://example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    assert!(repo.exists("taken1").await.unwrap());
    assert!(!repo.exists("free01").await.unwrap());
}

#[tokio::test]
async fn test_codes_are_case_sensitive() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    repo.insert(NewLink::new("https://lower.example", "abcdef"))
        .await
        .unwrap();
    repo.insert(NewLink::new("https://upper.example", "ABCDEF"))
        .await
        .unwrap();

    let lower = repo.find("abcdef").await.unwrap().unwrap();
    let upper = repo.find("ABCDEF").await.unwrap().unwrap();
    assert_eq!(lower.original_url, "https://lower.example");
    assert_eq!(upper.original_url, "https://upper.example");
}

#[tokio::test]
async fn test_duplicate_code_is_rejected() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());

    repo.insert(NewLink::new("https://first.example", "dup001"))
        .await
        .unwrap();

    let result = repo
        .insert(NewLink::new("https://second.example", "dup001"))
        .await;

    match result {
        Err(StoreError::DuplicateCode { code }) => assert_eq!(code, "dup001"),
        other => panic!("expected DuplicateCode, got {:?}", other),
    }

    let kept = repo.find("dup001").await.unwrap().unwrap();
    assert_eq!(kept.original_url, "https://first.example");
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test]
async fn test_same_url_may_have_many_codes() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    let a = repo
        .insert(NewLink::new("https://example.com", "first1"))
        .await
        .unwrap();
    let b = repo
        .insert(NewLink::new("https://example.com", "second"))
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    repo.insert(NewLink::new("https://example.com", "gone01"))
        .await
        .unwrap();

    assert!(repo.delete("gone01").await.unwrap());
    assert!(repo.find("gone01").await.unwrap().is_none());
    assert!(!repo.exists("gone01").await.unwrap());

    assert!(!repo.delete("gone01").await.unwrap());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    let first = repo
        .insert(NewLink::new("https://example.com", "reuse1"))
        .await
        .unwrap();
    repo.delete("reuse1").await.unwrap();

    let second = repo
        .insert(NewLink::new("https://example.com", "reuse1"))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_count() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());

    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_link(&pool, "cnt001", "https://a.example").await;
    common::create_test_link(&pool, "cnt002", "https://b.example").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_closed_pool_is_unavailable() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());
    pool.close().await;

    let result = repo.find("abc123").await;
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
