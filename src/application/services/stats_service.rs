//! Aggregate analytics over the registry.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Number of records included in the recent-URLs list.
const RECENT_LIMIT: usize = 10;

/// Summary statistics over all URL records.
#[derive(Debug, Clone)]
pub struct AnalyticsSummary {
    /// Count of all records, active or not.
    pub total_urls: i64,
    /// Sum of `click_count` across all records.
    pub total_clicks: i64,
    /// Clicks per URL, rounded to 2 decimal places; 0 when there are no URLs.
    pub avg_clicks_per_url: f64,
    /// The 10 most recently created records, newest first.
    pub recent_urls: Vec<UrlRecord>,
}

/// Read-only analytics aggregator.
///
/// Reads the registry independently of the create and redirect flows.
pub struct StatsService {
    urls: Arc<dyn UrlRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(urls: Arc<dyn UrlRepository>) -> Self {
        Self { urls }
    }

    /// Computes summary statistics over all records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn summarize(&self) -> Result<AnalyticsSummary, AppError> {
        let all = self.urls.list_all().await?;

        let total_urls = all.len() as i64;
        let total_clicks: i64 = all.iter().map(|record| record.click_count).sum();

        let avg_clicks_per_url = if total_urls == 0 {
            0.0
        } else {
            let avg = total_clicks as f64 / total_urls as f64;
            (avg * 100.0).round() / 100.0
        };

        let recent_urls = all.into_iter().take(RECENT_LIMIT).collect();

        Ok(AnalyticsSummary {
            total_urls,
            total_clicks,
            avg_clicks_per_url,
            recent_urls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::{Duration, Utc};

    fn record(id: i64, clicks: i64) -> UrlRecord {
        UrlRecord {
            id,
            original_url: format!("https://example.com/{id}"),
            short_code: format!("code{id}"),
            custom_alias: None,
            click_count: clicks,
            is_active: true,
            created_at: Utc::now() - Duration::seconds(id),
        }
    }

    #[tokio::test]
    async fn test_summarize_counts_and_average() {
        let mut urls = MockUrlRepository::new();
        urls.expect_list_all()
            .times(1)
            .returning(|| Ok(vec![record(1, 5), record(2, 0), record(3, 3)]));

        let service = StatsService::new(Arc::new(urls));

        let summary = service.summarize().await.unwrap();

        assert_eq!(summary.total_urls, 3);
        assert_eq!(summary.total_clicks, 8);
        assert_eq!(summary.avg_clicks_per_url, 2.67);
        assert_eq!(summary.recent_urls.len(), 3);
    }

    #[tokio::test]
    async fn test_summarize_empty_registry() {
        let mut urls = MockUrlRepository::new();
        urls.expect_list_all().times(1).returning(|| Ok(vec![]));

        let service = StatsService::new(Arc::new(urls));

        let summary = service.summarize().await.unwrap();

        assert_eq!(summary.total_urls, 0);
        assert_eq!(summary.total_clicks, 0);
        assert_eq!(summary.avg_clicks_per_url, 0.0);
        assert!(summary.recent_urls.is_empty());
    }

    #[tokio::test]
    async fn test_summarize_truncates_recent_to_ten() {
        let mut urls = MockUrlRepository::new();
        urls.expect_list_all()
            .times(1)
            .returning(|| Ok((1..=12).map(|id| record(id, 1)).collect()));

        let service = StatsService::new(Arc::new(urls));

        let summary = service.summarize().await.unwrap();

        assert_eq!(summary.total_urls, 12);
        assert_eq!(summary.recent_urls.len(), 10);
        // list_all order (newest first) is preserved.
        assert_eq!(summary.recent_urls[0].id, 1);
    }

    #[tokio::test]
    async fn test_summarize_rounds_to_two_decimals() {
        let mut urls = MockUrlRepository::new();
        urls.expect_list_all()
            .times(1)
            .returning(|| Ok(vec![record(1, 1), record(2, 0), record(3, 0)]));

        let service = StatsService::new(Arc::new(urls));

        let summary = service.summarize().await.unwrap();

        assert_eq!(summary.avg_clicks_per_url, 0.33);
    }
}
