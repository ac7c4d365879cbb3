//! PostgreSQL implementation of the click recorder.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    url_id: i64,
    clicked_at: DateTime<Utc>,
    user_agent: Option<String>,
    ip_address: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            id: row.id,
            url_id: row.url_id,
            clicked_at: row.clicked_at,
            user_agent: row.user_agent,
            ip_address: row.ip_address,
        }
    }
}

/// PostgreSQL click recorder backend.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        // The counter update and the event insert commit together, so
        // concurrent recorders on the same url never lose an increment.
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE urls SET click_count = click_count + 1 WHERE id = $1")
            .bind(new_click.url_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(AppError::not_found(
                "Unknown URL for click",
                json!({ "url_id": new_click.url_id }),
            ));
        }

        let row: ClickRow = sqlx::query_as(
            "INSERT INTO clicks (url_id, user_agent, ip_address) VALUES ($1, $2, $3) \
             RETURNING id, url_id, clicked_at, user_agent, ip_address",
        )
        .bind(new_click.url_id)
        .bind(&new_click.user_agent)
        .bind(&new_click.ip_address)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn count_by_url(&self, url_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE url_id = $1")
            .bind(url_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
