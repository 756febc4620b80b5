//! Integration tests for Little Lemon.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p little-lemon-integration-tests
//! ```
//!
//! Every test runs against a private in-memory SQLite database, so no setup is
//! needed. Tests that exercise the HTTP menu source stand up a `wiremock`
//! server per case.
//!
//! # Test Categories
//!
//! - `onboarding_flow` - Registration, initial route, logout
//! - `menu_sync` - One-shot import and the HTTP source
//! - `home_filter` - Search and category filtering over stored rows

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use little_lemon_app::remote::{MenuSource, MenuSourceError};
use little_lemon_app::{AppConfig, AppState, db};
use little_lemon_core::{MenuItem, MenuItemId, Price};

/// Fresh state over an empty in-memory database.
pub async fn memory_state() -> AppState {
    let config = AppConfig::from_lookup(|key| {
        (key == "LITTLE_LEMON_DATABASE_URL").then(|| "sqlite::memory:".to_owned())
    })
    .unwrap();
    let pool = db::create_memory_pool().await.unwrap();
    AppState::with_pool(config, pool).await.unwrap()
}

/// The sample menu served by [`FakeMenuSource`].
#[must_use]
pub fn sample_menu() -> Vec<MenuItem> {
    [
        (1, "Greek Salad", 1000, "starters"),
        (2, "Bruschetta", 700, "starters"),
        (3, "Grilled Fish", 2000, "mains"),
        (4, "Pasta", 1800, "mains"),
        (5, "Lemon Dessert", 850, "desserts"),
        (6, "Lemonade", 400, "drinks"),
        (7, "Chocolate Mousse", 900, "Desserts"),
    ]
    .into_iter()
    .map(|(id, title, cents, category)| MenuItem {
        id: MenuItemId::new(id),
        title: title.to_owned(),
        price: Price::from_cents(cents),
        description: format!("{title} from the Little Lemon kitchen"),
        category: category.to_owned(),
        image: format!("https://example.com/images/{id}.jpg"),
    })
    .collect()
}

/// In-process menu source that counts how often it is asked.
#[derive(Default)]
pub struct FakeMenuSource {
    calls: AtomicUsize,
}

impl FakeMenuSource {
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of `fetch_menu` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuSource for FakeMenuSource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(sample_menu())
    }
}
