//! Data layer: connection pool plus models and repositories for the
//! music-distribution tables (`releases`, `tracks`, `analytics`,
//! `financials`).
//!
//! The schema itself is owned externally; the `migrations/` directory only
//! exists so `#[sqlx::test]` databases have the tables.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
