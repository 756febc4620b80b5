//! Application state shared by the session and the background sync.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db::{self, MenuItemStore, ProfileStore};
use crate::error::Result;
use crate::sync::SyncLauncher;

/// Shared application state.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and both local stores, which share one connection pool.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    menu: MenuItemStore,
    profiles: ProfileStore,
    sync: SyncLauncher,
}

impl AppState {
    /// Open the configured database, run migrations and build the state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn connect(config: AppConfig) -> Result<Self> {
        let pool = db::create_pool(&config.database_url, config.max_connections).await?;
        tracing::info!("Database pool created");
        Self::with_pool(config, pool).await
    }

    /// Build the state over an existing pool, running migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error if migrations fail.
    pub async fn with_pool(config: AppConfig, pool: SqlitePool) -> Result<Self> {
        db::migrate(&pool).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                menu: MenuItemStore::new(pool.clone()),
                profiles: ProfileStore::new(pool),
                sync: SyncLauncher::new(),
                config,
            }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the menu item store.
    #[must_use]
    pub fn menu(&self) -> &MenuItemStore {
        &self.inner.menu
    }

    /// Get a reference to the profile store.
    #[must_use]
    pub fn profiles(&self) -> &ProfileStore {
        &self.inner.profiles
    }

    /// Get a reference to the once-per-process sync launcher.
    #[must_use]
    pub fn sync(&self) -> &SyncLauncher {
        &self.inner.sync
    }
}
