//! API route configuration.

use crate::api::handlers::{
    analytics_handler, check_alias_handler, delete_url_handler, resolve_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// REST API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /urls`                     - Create a short URL
/// - `GET    /urls/check-alias/{alias}` - Check alias availability
/// - `DELETE /urls/{id}`                - Delete a URL (acknowledge-only stub)
/// - `GET    /redirect/{code}`          - Resolve a code as JSON
/// - `GET    /analytics`                - Aggregate statistics
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(shorten_handler))
        .route("/urls/check-alias/{alias}", get(check_alias_handler))
        .route("/urls/{id}", delete(delete_url_handler))
        .route("/redirect/{code}", get(resolve_handler))
        .route("/analytics", get(analytics_handler))
}
