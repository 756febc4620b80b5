//! Onboarding screen: the registration form.

use tracing::info;

use little_lemon_core::{Email, UserProfile};

use crate::db::{ProfileStore, RepositoryError};

/// Notice shown when a field is left blank.
pub const REGISTRATION_INCOMPLETE: &str = "Registration unsuccessful. Please enter all data.";
/// Notice shown after the profile is stored.
pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful!";

/// Result of pressing "Register".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// All fields filled; the profile was stored.
    Registered(UserProfile),
    /// At least one field blank; nothing was stored.
    Incomplete,
}

impl RegistrationOutcome {
    /// Transient notice for the user.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::Registered(_) => REGISTRATION_SUCCESSFUL,
            Self::Incomplete => REGISTRATION_INCOMPLETE,
        }
    }
}

/// Registration form state.
///
/// The email format check only drives [`email_valid`](Self::email_valid); it
/// never blocks edits or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingForm {
    first_name: String,
    last_name: String,
    email: String,
    email_valid: bool,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            email_valid: true,
        }
    }
}

impl OnboardingForm {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    /// Update the email and re-run the format check.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.email_valid = Email::is_valid(&self.email);
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the last email edit passed the format check.
    #[must_use]
    pub const fn email_valid(&self) -> bool {
        self.email_valid
    }

    /// The form contents as a profile, exactly as typed.
    #[must_use]
    pub fn to_profile(&self) -> UserProfile {
        UserProfile::new(&self.first_name, &self.last_name, &self.email)
    }

    /// Store the profile if every field is filled.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store write fails.
    pub async fn register(
        &self,
        profiles: &ProfileStore,
    ) -> Result<RegistrationOutcome, RepositoryError> {
        let profile = self.to_profile();
        if profile.has_blank_field() {
            info!("Registration rejected: blank field");
            return Ok(RegistrationOutcome::Incomplete);
        }

        profiles.save(&profile).await?;
        info!("User registered");
        Ok(RegistrationOutcome::Registered(profile))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_email_starts_valid() {
        assert!(OnboardingForm::new().email_valid());
    }

    #[test]
    fn test_invalid_email_does_not_block_edits() {
        let mut form = OnboardingForm::new();
        form.set_email("tilly@");
        assert!(!form.email_valid());
        assert_eq!(form.email(), "tilly@");

        form.set_email("tilly@littlelemon");
        assert!(!form.email_valid());
        assert_eq!(form.email(), "tilly@littlelemon");

        form.set_email("tilly@littlelemon.com");
        assert!(form.email_valid());
    }

    #[test]
    fn test_notices() {
        assert_eq!(RegistrationOutcome::Incomplete.notice(), REGISTRATION_INCOMPLETE);
        assert_eq!(
            RegistrationOutcome::Registered(UserProfile::default()).notice(),
            REGISTRATION_SUCCESSFUL
        );
    }
}
