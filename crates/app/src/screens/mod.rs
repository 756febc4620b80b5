//! Screen models.
//!
//! Each screen holds the state a front end renders and exposes the actions
//! the user can take:
//!
//! - [`onboarding`] - registration form with email format check
//! - [`home`] - menu search and category filter
//! - [`profile`] - stored profile and logout

pub mod home;
pub mod onboarding;
pub mod profile;

pub use home::{CategoryChip, MenuFilter, category_chips};
pub use onboarding::{OnboardingForm, RegistrationOutcome};
pub use profile::ProfileView;
