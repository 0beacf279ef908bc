//! # Database Store
//!
//! Database connection pool and repository implementations.

// region: --- Modules
pub mod chat_repository;
pub mod models;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use chat_repository::ChatRepository;
pub use user_repository::UserRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// Initial schema, also applied directly to in-memory pools.
const INIT_SCHEMA: &str = include_str!("../../../migrations/20250101000000_init.sql");

/// Create a new SQLite connection pool, creating the database file if needed.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

/// Single-connection in-memory pool with the schema applied.
///
/// Every connection to `sqlite::memory:` is a separate database, hence the
/// connection cap.
pub async fn create_memory_pool() -> anyhow::Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Apply the schema without the migration bookkeeping table.
pub async fn init_schema(pool: &DbPool) -> anyhow::Result<()> {
    sqlx::raw_sql(INIT_SCHEMA).execute(pool).await?;
    Ok(())
}
// endregion: --- Types and Functions
