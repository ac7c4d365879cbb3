//! PostgreSQL implementation of the URL registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by every `urls` query.
const URL_COLUMNS: &str =
    "id, original_url, short_code, custom_alias, click_count, is_active, created_at";

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    custom_alias: Option<String>,
    click_count: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            custom_alias: row.custom_alias,
            click_count: row.click_count,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL registry backend.
///
/// The unique index on `urls.short_code` is the correctness mechanism for
/// code reservation; concurrent inserts of the same code lose with a unique
/// violation, mapped to [`AppError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn is_available(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(!exists)
    }

    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let sql = format!(
            "INSERT INTO urls (original_url, short_code, custom_alias) \
             VALUES ($1, $2, $3) RETURNING {URL_COLUMNS}"
        );

        let row: UrlRow = sqlx::query_as(&sql)
            .bind(&new_url.original_url)
            .bind(&new_url.short_code)
            .bind(&new_url.custom_alias)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let sql = format!("SELECT {URL_COLUMNS} FROM urls WHERE short_code = $1");

        let row: Option<UrlRow> = sqlx::query_as(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let sql = format!("SELECT {URL_COLUMNS} FROM urls WHERE id = $1");

        let row: Option<UrlRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let sql = format!("SELECT {URL_COLUMNS} FROM urls ORDER BY created_at DESC, id DESC");

        let rows: Vec<UrlRow> = sqlx::query_as(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }
}
