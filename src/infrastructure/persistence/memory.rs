//! In-memory storage backend.
//!
//! Implements both repository traits behind a single mutex, giving the same
//! atomicity guarantees as the PostgreSQL backend: code reservation is an
//! insert-or-conflict on the code map, and click recording updates the
//! counter and the event log under one lock. State is lost on restart; the
//! backend is intended for local development and tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{Click, NewClick, NewUrl, UrlRecord};
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_url_id: i64,
    next_click_id: i64,
    urls: HashMap<i64, UrlRecord>,
    // short_code -> url id; insertion here is the uniqueness constraint.
    codes: HashMap<String, i64>,
    clicks: Vec<Click>,
}

/// Mutex-guarded in-memory registry and click recorder.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flips a record to inactive, returning `false` if the code is unknown.
    ///
    /// No service flow deactivates records yet (delete is a stub); this is a
    /// state seam for exercising inactive-code resolution in tests.
    pub fn deactivate(&self, code: &str) -> bool {
        let mut inner = self.lock();

        let Some(&id) = inner.codes.get(code) else {
            return false;
        };

        match inner.urls.get_mut(&id) {
            Some(record) => {
                record.is_active = false;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl UrlRepository for MemoryStore {
    async fn is_available(&self, code: &str) -> Result<bool, AppError> {
        Ok(!self.lock().codes.contains_key(code))
    }

    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let mut inner = self.lock();

        if inner.codes.contains_key(&new_url.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "code": new_url.short_code }),
            ));
        }

        inner.next_url_id += 1;
        let record = UrlRecord {
            id: inner.next_url_id,
            original_url: new_url.original_url,
            short_code: new_url.short_code,
            custom_alias: new_url.custom_alias,
            click_count: 0,
            is_active: true,
            created_at: Utc::now(),
        };

        inner.codes.insert(record.short_code.clone(), record.id);
        inner.urls.insert(record.id, record.clone());

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let inner = self.lock();

        Ok(inner
            .codes
            .get(code)
            .and_then(|id| inner.urls.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.lock().urls.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut records: Vec<UrlRecord> = self.lock().urls.values().cloned().collect();

        // Newest first; id breaks creation-timestamp ties deterministically.
        records.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(records)
    }
}

#[async_trait]
impl ClickRepository for MemoryStore {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut inner = self.lock();

        if !inner.urls.contains_key(&new_click.url_id) {
            return Err(AppError::not_found(
                "Unknown URL for click",
                json!({ "url_id": new_click.url_id }),
            ));
        }

        inner.next_click_id += 1;
        let click = Click {
            id: inner.next_click_id,
            url_id: new_click.url_id,
            clicked_at: Utc::now(),
            user_agent: new_click.user_agent,
            ip_address: new_click.ip_address,
        };

        if let Some(record) = inner.urls.get_mut(&new_click.url_id) {
            record.click_count += 1;
        }
        inner.clicks.push(click.clone());

        Ok(click)
    }

    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError> {
        Ok(self
            .lock()
            .clicks
            .iter()
            .filter(|click| click.url_id == url_id)
            .count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_url(code: &str) -> NewUrl {
        NewUrl {
            original_url: "https://example.com".to_string(),
            short_code: code.to_string(),
            custom_alias: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryStore::new();

        let record = store.create(new_url("abc123")).await.unwrap();
        assert_eq!(record.click_count, 0);
        assert!(record.is_active);

        let found = store.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.id, record.id);

        let by_id = store.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(by_id.short_code, "abc123");
    }

    #[tokio::test]
    async fn test_create_duplicate_code_conflicts() {
        let store = MemoryStore::new();

        store.create(new_url("dupe42")).await.unwrap();
        let err = store.create(new_url("dupe42")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_is_available() {
        let store = MemoryStore::new();

        assert!(store.is_available("free42").await.unwrap());
        store.create(new_url("free42")).await.unwrap();
        assert!(!store.is_available("free42").await.unwrap());
    }

    #[tokio::test]
    async fn test_record_click_increments_counter() {
        let store = MemoryStore::new();
        let record = store.create(new_url("hit123")).await.unwrap();

        for _ in 0..3 {
            store
                .record(NewClick {
                    url_id: record.id,
                    user_agent: None,
                    ip_address: None,
                })
                .await
                .unwrap();
        }

        let found = store.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.click_count, 3);
        assert_eq!(store.count_by_url(record.id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_record_click_unknown_url() {
        let store = MemoryStore::new();

        let err = store
            .record(NewClick {
                url_id: 999,
                user_agent: None,
                ip_address: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let store = MemoryStore::new();

        store.create(new_url("first1")).await.unwrap();
        store.create(new_url("second")).await.unwrap();
        store.create(new_url("third1")).await.unwrap();

        let all = store.list_all().await.unwrap();
        let codes: Vec<&str> = all.iter().map(|r| r.short_code.as_str()).collect();

        assert_eq!(codes, vec!["third1", "second", "first1"]);
    }

    #[tokio::test]
    async fn test_deactivate() {
        let store = MemoryStore::new();
        store.create(new_url("gone12")).await.unwrap();

        assert!(store.deactivate("gone12"));
        assert!(!store.deactivate("missing"));

        let record = store.find_by_code("gone12").await.unwrap().unwrap();
        assert!(!record.is_active);
    }
}
