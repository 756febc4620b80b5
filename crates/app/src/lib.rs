//! Little Lemon App - Menu sync, local stores, navigation and screens.
//!
//! # Architecture
//!
//! - `SQLite` (via `sqlx`) holds the cached menu and the user profile
//! - The remote menu is fetched once, in the background, only while the local
//!   menu table is empty
//! - Screens are plain state models; a front end (the CLI) renders them
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`db`] - Menu item store and profile store
//! - [`remote`] - Remote menu source
//! - [`sync`] - One-shot import of the remote menu
//! - [`navigation`] - Destinations and back stack
//! - [`screens`] - Onboarding, Home and Profile models
//! - [`session`] - Ties state, navigation and sync together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod navigation;
pub mod remote;
pub mod screens;
pub mod session;
pub mod state;
pub mod sync;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use navigation::{Destination, Navigator};
pub use session::LittleLemon;
pub use state::AppState;
pub use sync::SyncOutcome;
