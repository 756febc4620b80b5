//! Core types for Little Lemon.
//!
//! This module provides type-safe wrappers for the restaurant's domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod menu;
pub mod price;
pub mod profile;

pub use category::{MenuCategory, UnknownCategory};
pub use email::{Email, EmailError};
pub use id::*;
pub use menu::MenuItem;
pub use price::Price;
pub use profile::UserProfile;
