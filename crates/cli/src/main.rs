//! Little Lemon CLI - Browse the menu and manage the local profile.
//!
//! # Usage
//!
//! ```bash
//! # Launch: import the menu if needed and show the first screen
//! lemon start
//!
//! # Register (onboarding)
//! lemon register -f Tilly -l Doe -e tilly@littlelemon.com
//!
//! # Browse the menu, optionally filtered
//! lemon menu -s lemon -c desserts
//!
//! # Show the profile, then log out
//! lemon profile
//! lemon logout
//! ```
//!
//! # Commands
//!
//! - `start` - Launch and render the initial screen
//! - `register` - Submit the onboarding form
//! - `menu` - Render the home screen with filters
//! - `profile` - Render the profile screen
//! - `logout` - Clear the profile
//! - `sync` - Run the one-shot menu import
//! - `migrate` - Apply database migrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use little_lemon_core::MenuCategory;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "lemon")]
#[command(author, version, about = "Little Lemon menu client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import the menu if needed and show the initial screen
    Start,
    /// Register a user (onboarding)
    Register {
        /// First name
        #[arg(short, long, default_value = "")]
        first_name: String,

        /// Last name
        #[arg(short, long, default_value = "")]
        last_name: String,

        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// Show the menu
    Menu {
        /// Case-insensitive search on item titles
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category filter (starters, mains, desserts, drinks)
        #[arg(short, long)]
        category: Option<MenuCategory>,
    },
    /// Show the stored profile
    Profile,
    /// Clear the stored profile
    Logout,
    /// Import the remote menu if the local cache is empty
    Sync,
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so screen output on stdout stays clean
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "little_lemon_app=info,lemon=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Start => commands::start::run().await?,
        Commands::Register {
            first_name,
            last_name,
            email,
        } => commands::account::register(first_name, last_name, email).await?,
        Commands::Menu { search, category } => commands::menu::show(search, category).await?,
        Commands::Profile => commands::account::show().await?,
        Commands::Logout => commands::account::logout().await?,
        Commands::Sync => commands::menu::sync().await?,
        Commands::Migrate => commands::migrate::run().await?,
    }
    Ok(())
}
