//! Menu commands.
//!
//! # Usage
//!
//! ```bash
//! # Whole menu
//! lemon menu
//!
//! # Desserts with "lemon" in the title
//! lemon menu -s lemon -c desserts
//!
//! # Import the remote menu if nothing is cached yet
//! lemon sync
//! ```

use little_lemon_app::screens::MenuFilter;
use little_lemon_app::{Result, SyncOutcome};
use little_lemon_core::MenuCategory;

use super::{launch, render};

/// Render the home screen with the given filters.
pub async fn show(search: String, category: Option<MenuCategory>) -> Result<()> {
    let mut app = launch().await?;
    if let Err(e) = app.wait_for_sync().await {
        tracing::warn!(error = %e, "Showing cached menu only");
    }

    let filter = MenuFilter::with(search, category);
    let items = app.visible_items(&filter).await?;
    tracing::debug!(visible = items.len(), "Menu filtered");

    #[allow(clippy::print_stdout)]
    {
        print!("{}", render::home(&filter, &items));
    }
    Ok(())
}

/// Run the one-shot import and report what happened.
pub async fn sync() -> Result<()> {
    let mut app = launch().await?;
    let outcome = app.wait_for_sync().await?;

    #[allow(clippy::print_stdout)]
    {
        match outcome {
            Some(SyncOutcome::Imported(count)) => println!("Imported {count} menu items"),
            Some(SyncOutcome::AlreadyPopulated) => println!("Menu already cached"),
            None => println!("Menu sync already ran in this process"),
        }
    }
    Ok(())
}
