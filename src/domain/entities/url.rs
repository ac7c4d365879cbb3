//! URL record entity representing a short code to long URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter and lifecycle metadata.
///
/// Once created, a record is immutable except for `click_count`, which is
/// incremented by the click recorder. `custom_alias`, when present, always
/// equals `short_code`; the record is reachable through exactly one code.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub custom_alias: Option<String>,
    pub click_count: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for reserving a new short code.
///
/// `short_code` is either a generated candidate or a validated custom alias;
/// in the latter case `custom_alias` carries a copy of it.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub original_url: String,
    pub short_code: String,
    pub custom_alias: Option<String>,
}
