//! DTOs for the create-short-URL endpoint.

use crate::domain::entities::UrlRecord;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Alias charset check; empty is allowed and treated as "no alias".
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z]*$").unwrap());

/// Request to shorten a URL, optionally under a custom alias.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The destination URL (must be a valid absolute URL).
    #[validate(url(message = "Please enter a valid URL"))]
    pub original_url: String,

    /// Optional user-chosen short code.
    #[validate(length(max = 50))]
    #[validate(regex(path = "*CUSTOM_ALIAS_REGEX"))]
    pub custom_alias: Option<String>,
}

/// Response view of a freshly created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    /// Builds the response from a record and its rendered short URL.
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            short_code: record.short_code,
            short_url,
            original_url: record.original_url,
            click_count: record.click_count,
            created_at: record.created_at,
        }
    }
}
