//! Handlers for short code resolution.

use axum::{
    Json,
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::api::dto::redirect::RedirectResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Records a click as a side effect (best-effort). Reserved path segments
/// never resolve as short codes. Returns 307 Temporary Redirect, or 404 if
/// the code is unknown or inactive.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .link_service
        .resolve(&code, user_agent(&headers), Some(addr.ip().to_string()))
        .await?;

    Ok(Redirect::temporary(&record.original_url))
}

/// Resolves a short code to its destination URL as JSON.
///
/// # Endpoint
///
/// `GET /api/redirect/{code}`
///
/// Same semantics as the top-level redirect, including click recording, but
/// returns `{"redirectUrl": ...}` for clients that perform the navigation
/// themselves.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Json<RedirectResponse>, AppError> {
    let record = state
        .link_service
        .resolve(&code, user_agent(&headers), Some(addr.ip().to_string()))
        .await?;

    Ok(Json(RedirectResponse {
        redirect_url: record.original_url,
    }))
}

fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
