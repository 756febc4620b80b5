//! Email address type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Pattern accepted for email addresses.
///
/// A local part of up to 256 characters from `[a-zA-Z0-9+._%-]`, an `@`, then
/// a domain made of one label plus at least one dotted label.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("Invalid regex")
});

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input does not look like `local@domain.tld`.
    #[error("invalid email")]
    Malformed,
}

/// An email address that passed the format check.
///
/// The pattern is the only constraint; there is no overall length cap
/// beyond what the pattern itself bounds.
///
/// ## Examples
///
/// ```
/// use little_lemon_core::Email;
///
/// // Valid emails
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// // Invalid emails
/// assert!(Email::parse("").is_err());             // empty
/// assert!(Email::parse("no-at-symbol").is_err()); // missing @
/// assert!(Email::parse("user@localhost").is_err()); // no dotted domain
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or does not match the address
    /// pattern.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_RE.is_match(s) {
            return Err(EmailError::Malformed);
        }

        Ok(Self(s.to_owned()))
    }

    /// Whether `s` would parse as an email.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
