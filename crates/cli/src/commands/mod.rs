//! Subcommand implementations.

pub mod account;
pub mod menu;
pub mod migrate;
pub mod render;
pub mod start;

use std::sync::Arc;

use little_lemon_app::remote::{HttpMenuSource, MenuSource};
use little_lemon_app::{AppConfig, AppState, LittleLemon, Result};

/// Load configuration from the environment and open the local database.
async fn open_state() -> Result<AppState> {
    let config = AppConfig::from_env()?;
    tracing::debug!(database = %config.database_url, "Opening local database");
    AppState::connect(config).await
}

/// Launch a session against the configured remote menu.
async fn launch() -> Result<LittleLemon> {
    let state = open_state().await?;
    let source: Arc<dyn MenuSource> =
        Arc::new(HttpMenuSource::new(state.config().menu_url.clone()));
    LittleLemon::launch(state, source).await
}
