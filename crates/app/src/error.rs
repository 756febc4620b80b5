//! Unified error handling.
//!
//! Every fallible operation exposed by the crate returns [`Result<T>`], wrapping
//! the per-module error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::remote::MenuSourceError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Local store operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Remote menu fetch failed.
    #[error("Menu source error: {0}")]
    MenuSource(#[from] MenuSourceError),

    /// The background sync task panicked or was aborted.
    #[error("Sync task failed: {0}")]
    SyncTask(#[from] tokio::task::JoinError),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(RepositoryError::Database(err))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
