//! Little Lemon Core - Shared domain types.
//!
//! This crate provides the types used across all Little Lemon components:
//! - `app` - Menu sync, local stores, navigation and screen models
//! - `cli` - Command-line front end driving the screens
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Menu items, prices, categories, emails and the user profile

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
