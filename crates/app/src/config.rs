//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LITTLE_LEMON_DATABASE_URL` - SQLite connection string
//!   (default: `sqlite://little-lemon.db?mode=rwc`)
//! - `LITTLE_LEMON_MENU_URL` - Remote menu JSON endpoint
//!   (default: the Little Lemon menu published on GitHub)
//! - `LITTLE_LEMON_DB_MAX_CONNECTIONS` - Pool size (default: 5)

use thiserror::Error;
use url::Url;

/// Default local database.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://little-lemon.db?mode=rwc";

/// Default remote menu endpoint.
pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/menu.json";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Little Lemon application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection URL for the menu table and profile preferences
    pub database_url: String,
    /// Remote menu endpoint
    pub menu_url: Url,
    /// Maximum pooled database connections
    pub max_connections: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("LITTLE_LEMON_DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let menu_url = lookup("LITTLE_LEMON_MENU_URL")
            .unwrap_or_else(|| DEFAULT_MENU_URL.to_string());
        let menu_url = Url::parse(&menu_url).map_err(|e| {
            ConfigError::InvalidEnvVar("LITTLE_LEMON_MENU_URL".to_string(), e.to_string())
        })?;
        if !matches!(menu_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "LITTLE_LEMON_MENU_URL".to_string(),
                format!("unsupported scheme '{}'", menu_url.scheme()),
            ));
        }

        let max_connections = match lookup("LITTLE_LEMON_DB_MAX_CONNECTIONS") {
            Some(raw) => parse_max_connections(&raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            menu_url,
            max_connections,
        })
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| {
        ConfigError::InvalidEnvVar("LITTLE_LEMON_DB_MAX_CONNECTIONS".to_string(), reason)
    };
    let value = raw.trim().parse::<u32>().map_err(|e| invalid(e.to_string()))?;
    if value == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(value)
}
