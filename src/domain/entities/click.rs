//! Click entity representing a single resolution of a short code.

use chrono::{DateTime, Utc};

/// A click event recorded when a short code is resolved.
///
/// Client metadata is captured verbatim and never parsed; both fields are
/// optional to handle missing headers gracefully.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub url_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Input data for recording a new click event.
///
/// `url_id` must reference an existing URL record; the timestamp is assigned
/// by the storage layer.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub url_id: i64,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
