//! Handler for the create-short-URL endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/long/path",
///   "customAlias": "launch2026"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 on a malformed URL or alias, 409 when the requested alias is
/// already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state
        .link_service
        .shorten(payload.original_url, payload.custom_alias)
        .await?;

    let short_url = state.link_service.short_url(&record);

    Ok(Json(ShortenResponse::from_record(record, short_url)))
}
