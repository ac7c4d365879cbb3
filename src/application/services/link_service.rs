//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewClick, NewUrl, UrlRecord};
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, generate_code, is_reserved, validate_custom_alias,
};
use serde_json::json;
use url::Url;

/// Collision retries before giving up on code generation.
///
/// With 62^6 candidate codes a handful of attempts is plenty; the bound turns
/// a pathologically full code space into an explicit error instead of an
/// unbounded loop.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Orchestrates the code generator, registry, and click recorder.
///
/// Owns the create flow (validate, reserve, retry on collision) and the
/// redirect flow (lookup, click accounting, reserved-word guard).
pub struct LinkService {
    urls: Arc<dyn UrlRepository>,
    clicks: Arc<dyn ClickRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public host prefix used to render short URLs.
    pub fn new(
        urls: Arc<dyn UrlRepository>,
        clicks: Arc<dyn ClickRepository>,
        base_url: String,
    ) -> Self {
        Self {
            urls,
            clicks,
            base_url,
        }
    }

    /// Creates a short URL record.
    ///
    /// # Custom aliases
    ///
    /// A non-empty `custom_alias` is validated and reserved as-is. If the
    /// alias is taken, either at the availability pre-check or because a
    /// concurrent writer won the insert race, the call fails with
    /// [`AppError::Conflict`]; it is never silently retried with a generated
    /// code.
    ///
    /// # Generated codes
    ///
    /// Without an alias, random 6-character candidates are reserved with a
    /// bounded retry: a collision mints a new candidate, and exhaustion after
    /// 10 attempts fails with [`AppError::Internal`]. Collisions are absorbed
    /// here and never surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or alias,
    /// [`AppError::Conflict`] when the requested alias is in use.
    pub async fn shorten(
        &self,
        original_url: String,
        custom_alias: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        validate_original_url(&original_url)?;

        let alias = custom_alias
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        if let Some(alias) = alias {
            return self.reserve_alias(original_url, alias).await;
        }

        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let candidate = generate_code(DEFAULT_CODE_LENGTH);

            match self
                .urls
                .create(NewUrl {
                    original_url: original_url.clone(),
                    short_code: candidate,
                    custom_alias: None,
                })
                .await
            {
                Ok(record) => return Ok(record),
                // Candidate collided with a concurrent or prior insert.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Short code space exhausted",
            json!({ "attempts": MAX_GENERATE_ATTEMPTS }),
        ))
    }

    /// Reserves a user-chosen alias, failing on any conflict.
    async fn reserve_alias(
        &self,
        original_url: String,
        alias: String,
    ) -> Result<UrlRecord, AppError> {
        validate_custom_alias(&alias)?;

        if !self.urls.is_available(&alias).await? {
            return Err(alias_taken(&alias));
        }

        match self
            .urls
            .create(NewUrl {
                original_url,
                short_code: alias.clone(),
                custom_alias: Some(alias.clone()),
            })
            .await
        {
            Ok(record) => Ok(record),
            // Another writer won the race between the pre-check and insert.
            Err(AppError::Conflict { .. }) => Err(alias_taken(&alias)),
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code for redirecting, recording a click.
    ///
    /// Reserved route segments short-circuit to [`AppError::NotFound`] before
    /// any registry lookup. Click recording is best-effort telemetry: a
    /// recording failure is logged and does not block the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is reserved, unknown, or
    /// belongs to an inactive record.
    pub async fn resolve(
        &self,
        code: &str,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        if is_reserved(code) {
            return Err(code_not_found(code));
        }

        let record = self
            .urls
            .find_by_code(code)
            .await?
            .filter(|r| r.is_active)
            .ok_or_else(|| code_not_found(code))?;

        let click = NewClick {
            url_id: record.id,
            user_agent,
            ip_address,
        };

        if let Err(e) = self.clicks.record(click).await {
            tracing::warn!(code, error = %e, "failed to record click");
        }

        Ok(record)
    }

    /// Checks whether an alias is free to reserve.
    ///
    /// Reserved route segments report as unavailable, matching what a
    /// subsequent [`LinkService::shorten`] with that alias would do.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn check_alias(&self, alias: &str) -> Result<bool, AppError> {
        if is_reserved(alias) {
            return Ok(false);
        }

        self.urls.is_available(alias).await
    }

    /// Acknowledges a delete request for an existing record.
    ///
    /// Soft delete is not implemented: the record is verified to exist and
    /// the request is acknowledged without any state change. See DESIGN.md
    /// for the pending product decision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` does not reference a record.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let record = self
            .urls
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": id })))?;

        tracing::debug!(id = record.id, "delete acknowledged without state change");
        Ok(())
    }

    /// Renders the user-facing short URL for a record.
    pub fn short_url(&self, record: &UrlRecord) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            record.short_code
        )
    }
}

fn validate_original_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::bad_request(
            "URL scheme must be http or https",
            json!({ "scheme": other }),
        )),
    }
}

fn alias_taken(alias: &str) -> AppError {
    AppError::conflict(
        "Custom alias is already taken",
        json!({ "alias": alias }),
    )
}

fn code_not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
