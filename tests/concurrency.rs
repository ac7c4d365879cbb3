//! Concurrency properties of code allocation and click accounting, exercised
//! against the in-memory backend.

mod common;

use snaplink::domain::repositories::{ClickRepository, UrlRepository};
use snaplink::error::AppError;
use std::collections::HashSet;

#[tokio::test]
async fn test_concurrent_shorten_yields_unique_codes() {
    let (state, _store) = common::memory_state();

    let mut handles = Vec::new();
    for i in 0..100 {
        let service = state.link_service.clone();
        handles.push(tokio::spawn(async move {
            service
                .shorten(format!("https://example.com/{i}"), None)
                .await
                .unwrap()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        let record = handle.await.unwrap();
        assert!(codes.insert(record.short_code), "duplicate code allocated");
    }

    assert_eq!(codes.len(), 100);
}

#[tokio::test]
async fn test_concurrent_alias_reservation_single_winner() {
    let (state, _store) = common::memory_state();

    let mut handles = Vec::new();
    for i in 0..20 {
        let service = state.link_service.clone();
        handles.push(tokio::spawn(async move {
            service
                .shorten(
                    format!("https://example.com/{i}"),
                    Some("contested".to_string()),
                )
                .await
        }));
    }

    let mut winners = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(record) => {
                assert_eq!(record.short_code, "contested");
                winners += 1;
            }
            Err(AppError::Conflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 19);
}

#[tokio::test]
async fn test_alias_precedence_sequential() {
    let (state, _store) = common::memory_state();

    state
        .link_service
        .shorten("https://example.com/1".to_string(), Some("abc".to_string()))
        .await
        .unwrap();

    let second = state
        .link_service
        .shorten("https://example.com/2".to_string(), Some("abc".to_string()))
        .await;

    // Must conflict, not silently succeed with a different code.
    assert!(matches!(second.unwrap_err(), AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_concurrent_clicks_lose_no_increment() {
    let (state, store) = common::memory_state();

    let record = state
        .link_service
        .shorten("https://example.com/hot".to_string(), None)
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let service = state.link_service.clone();
        let code = record.short_code.clone();
        handles.push(tokio::spawn(async move {
            service.resolve(&code, None, None).await.unwrap()
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let updated = store.find_by_id(record.id).await.unwrap().unwrap();
    assert_eq!(updated.click_count, 50);
    assert_eq!(store.count_by_url(record.id).await.unwrap(), 50);
}
