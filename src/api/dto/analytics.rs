//! DTOs for the analytics endpoint.

use crate::application::services::AnalyticsSummary;
use crate::domain::entities::UrlRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate analytics over all short URLs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_urls: i64,
    pub total_clicks: i64,
    /// Average clicks per URL; `avgCtr` is the established wire name.
    #[serde(rename = "avgCtr")]
    pub avg_clicks_per_url: f64,
    pub recent_urls: Vec<UrlInfo>,
}

/// Summary view of a single URL record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlInfo {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlInfo {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            short_code: record.short_code,
            original_url: record.original_url,
            click_count: record.click_count,
            is_active: record.is_active,
            created_at: record.created_at,
        }
    }
}

impl From<AnalyticsSummary> for AnalyticsResponse {
    fn from(summary: AnalyticsSummary) -> Self {
        Self {
            total_urls: summary.total_urls,
            total_clicks: summary.total_clicks,
            avg_clicks_per_url: summary.avg_clicks_per_url,
            recent_urls: summary.recent_urls.into_iter().map(UrlInfo::from).collect(),
        }
    }
}
