//! Repository trait for click recording.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Recorder for click events.
///
/// Recording a click inserts the event and increments the owning record's
/// `click_count` by exactly one, as a single atomic unit relative to
/// concurrent recorders on the same `url_id`. Increments for different ids
/// are independent; no global ordering is required.
///
/// The recorder does not re-check `is_active`; callers verify the record is
/// resolvable before recording.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a click event and increments the record's counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `url_id` does not reference an
    /// existing record, [`AppError::Internal`] on storage errors.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts click events referencing the given record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError>;
}
