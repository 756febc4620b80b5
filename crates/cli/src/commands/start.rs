//! Launch the app and show the first screen.
//!
//! # Usage
//!
//! ```bash
//! lemon start
//! ```
//!
//! Runs the one-shot menu import if the local cache is empty, then renders
//! Home for a registered user or Onboarding otherwise.

use little_lemon_app::screens::{MenuFilter, OnboardingForm};
use little_lemon_app::{Destination, Result};

use super::{launch, render};

/// Launch and render the initial destination.
pub async fn run() -> Result<()> {
    let mut app = launch().await?;

    // A failed import still lets the app open on whatever is cached
    if let Err(e) = app.wait_for_sync().await {
        tracing::warn!(error = %e, "Continuing without a fresh menu");
    }

    let screen = match app.current() {
        Destination::Home => {
            let filter = MenuFilter::new();
            let items = app.visible_items(&filter).await?;
            render::home(&filter, &items)
        }
        Destination::Onboarding => render::onboarding(&OnboardingForm::new()),
        Destination::Profile => {
            let view = app.open_profile().await?;
            render::profile(&view.profile)
        }
    };

    #[allow(clippy::print_stdout)]
    {
        println!("== {} ==", app.current());
        print!("{screen}");
    }
    Ok(())
}
