//! DTO for the alias availability endpoint.

use serde::Serialize;

/// Whether an alias is free to reserve.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}
