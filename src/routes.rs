//! Top-level router combining the redirect path and the REST API.
//!
//! # Route Structure
//!
//! - `GET /{code}` - Short URL redirect (reserved segments 404 before lookup)
//! - `GET /health` - Health check
//! - `/api/*`      - REST API (create, availability, resolve, analytics, delete)

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `/api` and `/health` are static routes and therefore shadow the `{code}`
/// capture; the remaining reserved segments are rejected inside the
/// resolution service before any registry lookup.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
