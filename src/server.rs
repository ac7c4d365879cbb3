//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, applies migrations, and runs the Axum server.

use crate::config::Config;
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::infrastructure::persistence::{MemoryStore, PgClickRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// With `DATABASE_URL` set, connects a PostgreSQL pool and applies embedded
/// migrations; without it, falls back to the in-memory backend.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            let pool = Arc::new(pool);
            let urls: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(pool.clone()));
            let clicks: Arc<dyn ClickRepository> = Arc::new(PgClickRepository::new(pool));

            AppState::new(urls, clicks, config.base_url.clone())
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage");

            let store = Arc::new(MemoryStore::new());
            AppState::new(store.clone(), store, config.base_url.clone())
        }
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
