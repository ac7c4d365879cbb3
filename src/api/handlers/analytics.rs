//! Handler for the analytics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate analytics over all short URLs.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// Counts include inactive records; `recentUrls` holds the 10 most recently
/// created records, newest first.
pub async fn analytics_handler(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let summary = state.stats_service.summarize().await?;

    Ok(Json(summary.into()))
}
