//! Local SQLite persistence.
//!
//! # Tables
//!
//! - `menu_item` - Menu rows imported once from the remote menu
//! - `preference` - Namespaced key/value pairs (holds the user profile)
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/app/migrations/` and run via
//! [`migrate`], either at startup or explicitly:
//! ```bash
//! cargo run -p little-lemon-cli -- migrate
//! ```

pub mod menu;
pub mod profile;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use menu::MenuItemStore;
pub use profile::ProfileStore;

/// Errors from the local stores.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Query or connection failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored value could not be decoded back into its domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a SQLite connection pool, creating the database file if missing.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Uses a single connection that is never recycled, since every SQLite memory
/// connection sees its own database.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Apply the embedded schema migrations.
///
/// # Errors
///
/// Returns `RepositoryError::Migration` if a migration fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), RepositoryError> {
    tracing::debug!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
