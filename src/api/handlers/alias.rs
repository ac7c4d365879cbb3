//! Handler for the alias availability check.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::alias::AvailabilityResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether a custom alias is free to reserve.
///
/// # Endpoint
///
/// `GET /api/urls/check-alias/{alias}`
///
/// Read-only; availability is advisory and a later create can still lose a
/// race for the alias. Reserved route segments report as unavailable.
pub async fn check_alias_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let available = state.link_service.check_alias(&alias).await?;

    Ok(Json(AvailabilityResponse { available }))
}
