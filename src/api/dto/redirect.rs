//! DTOs for the JSON resolve and delete endpoints.

use serde::Serialize;

/// Resolved destination for a short code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub redirect_url: String,
}

/// Acknowledgement for a delete request.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
