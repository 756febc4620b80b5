//! The locally stored user profile.

use serde::{Deserialize, Serialize};

/// First name, last name and email of the signed-in user.
///
/// The fields are independent strings; an absent value is the empty string.
/// A non-empty `email` is what marks a user as registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserProfile {
    /// Create a profile from its three fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Whether this profile identifies a registered user.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        !self.email.is_empty()
    }

    /// Whether any of the three fields is blank (empty or whitespace only).
    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|f| f.trim().is_empty())
    }
}
