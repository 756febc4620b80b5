//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! lemon migrate
//! ```
//!
//! # Environment Variables
//!
//! - `LITTLE_LEMON_DATABASE_URL` - SQLite connection string
//!
//! # Migration Files
//!
//! Migrations live in `crates/app/migrations/` and are embedded at build time:
//! ```text
//! migrations/
//! ├── 20260101000001_create_menu_item.sql
//! └── 20260101000002_create_preference.sql
//! ```

use little_lemon_app::{AppConfig, Result, db};

/// Apply all pending migrations.
pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing::info!("Connecting to local database...");
    let pool = db::create_pool(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    db::migrate(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
