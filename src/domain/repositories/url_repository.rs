//! Repository trait for the short code registry.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// The authoritative code-to-record registry.
///
/// Uniqueness of `short_code` is enforced by the storage backend at insert
/// time; [`UrlRepository::is_available`] is an early-reject optimization only
/// and must never be treated as a reservation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns `true` iff no existing record uses `code`.
    ///
    /// A concurrent writer may still win the code between this check and a
    /// subsequent [`UrlRepository::create`]; callers must handle the insert
    /// failing anyway.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn is_available(&self, code: &str) -> Result<bool, AppError>;

    /// Reserves a code by inserting a new record.
    ///
    /// The new record starts with `click_count = 0` and `is_active = true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken (unique
    /// constraint violation), [`AppError::Internal`] on storage errors.
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Lists all records, newest-created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;
}
