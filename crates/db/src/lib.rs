//! Persistence layer for the career goals service.
//!
//! Owns the connection pool, migrations, row models and repositories.

pub mod models;
pub mod repositories;

use serde::Serialize;
use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Snapshot of the goals store, as reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct StoreStatus {
    /// Rows currently in `goals`.
    pub goal_count: i64,
    /// Version of the newest successfully applied migration.
    pub schema_version: Option<i64>,
}

/// Query the `goals` table and the migration ledger in one round trip.
///
/// Fails when the table is missing, so a schema that never migrated shows
/// up here even though [`health_check`] would pass.
pub async fn store_status(pool: &DbPool) -> Result<StoreStatus, sqlx::Error> {
    sqlx::query_as::<_, StoreStatus>(
        "SELECT \
            (SELECT COUNT(*) FROM goals) AS goal_count, \
            (SELECT MAX(version) FROM _sqlx_migrations WHERE success) AS schema_version",
    )
    .fetch_one(pool)
    .await
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
