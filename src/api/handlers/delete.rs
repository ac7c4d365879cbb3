//! Handler for the delete endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::redirect::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Acknowledges a delete request for a URL record.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}`
///
/// Known limitation: the record is verified to exist but no state changes;
/// soft delete is a pending product decision (see DESIGN.md). Returns 404
/// when the id is unknown.
pub async fn delete_url_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "URL deleted successfully".to_string(),
    }))
}
