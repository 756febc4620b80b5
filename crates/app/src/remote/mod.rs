//! Remote menu source.
//!
//! # Architecture
//!
//! - One GET against a fixed JSON endpoint, no retry, no pagination
//! - The endpoint is served as `text/plain`, so the body is read as text and
//!   decoded with `serde_json` whatever the content type says
//! - [`MenuSource`] is the seam the initial sync is written against
//!
//! # Example
//!
//! ```rust,ignore
//! use little_lemon_app::remote::{HttpMenuSource, MenuSource};
//!
//! let source = HttpMenuSource::new(config.menu_url.clone());
//! let items = source.fetch_menu().await?;
//! ```

mod client;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use little_lemon_core::MenuItem;

pub use client::HttpMenuSource;

/// Errors that can occur when fetching the remote menu.
#[derive(Debug, Error)]
pub enum MenuSourceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from menu endpoint")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Somewhere the full menu can be fetched from.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Fetch every menu item.
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuSourceError>;
}
