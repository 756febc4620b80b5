//! Destinations and the back stack.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Onboarding,
    Home,
    Profile,
}

impl Destination {
    /// Route name.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Onboarding => "Onboarding",
            Self::Home => "Home",
            Self::Profile => "Profile",
        }
    }

    /// Where the app opens: Home for a registered user, otherwise Onboarding.
    #[must_use]
    pub const fn initial(has_registered_user: bool) -> Self {
        if has_registered_user {
            Self::Home
        } else {
            Self::Onboarding
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Returned when a route name matches no [`Destination`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Destination {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Onboarding" => Ok(Self::Onboarding),
            "Home" => Ok(Self::Home),
            "Profile" => Ok(Self::Profile),
            _ => Err(UnknownRoute(s.to_owned())),
        }
    }
}

/// Back stack of destinations; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Destination>,
}

impl Navigator {
    /// Start at `start`.
    #[must_use]
    pub fn new(start: Destination) -> Self {
        Self { stack: vec![start] }
    }

    /// The destination on top of the stack.
    #[must_use]
    pub fn current(&self) -> Destination {
        *self.stack.last().unwrap_or(&Destination::Onboarding)
    }

    /// Push `destination`. Navigating to the current destination is a no-op.
    pub fn navigate(&mut self, destination: Destination) {
        if self.current() != destination {
            tracing::debug!(from = %self.current(), to = %destination, "navigate");
            self.stack.push(destination);
        }
    }

    /// Pop the current destination.
    ///
    /// Returns `false`, leaving the stack unchanged, when only the root is left.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Drop the whole stack and start over at `destination`.
    pub fn reset_to(&mut self, destination: Destination) {
        tracing::debug!(to = %destination, "reset navigation stack");
        self.stack.clear();
        self.stack.push(destination);
    }

    /// Destinations from root to top.
    #[must_use]
    pub fn stack(&self) -> &[Destination] {
        &self.stack
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_destination() {
        assert_eq!(Destination::initial(true), Destination::Home);
        assert_eq!(Destination::initial(false), Destination::Onboarding);
    }

    #[test]
    fn test_route_names_round_trip() {
        for dest in [Destination::Onboarding, Destination::Home, Destination::Profile] {
            assert_eq!(dest.route().parse::<Destination>().unwrap(), dest);
        }
        assert!("Settings".parse::<Destination>().is_err());
    }

    #[test]
    fn test_back_stops_at_root() {
        let mut nav = Navigator::new(Destination::Home);
        nav.navigate(Destination::Profile);
        assert_eq!(nav.current(), Destination::Profile);

        assert!(nav.back());
        assert_eq!(nav.current(), Destination::Home);
        assert!(!nav.back());
        assert_eq!(nav.current(), Destination::Home);
    }

    #[test]
    fn test_reset_drops_history() {
        let mut nav = Navigator::new(Destination::Onboarding);
        nav.navigate(Destination::Home);
        nav.navigate(Destination::Profile);

        nav.reset_to(Destination::Onboarding);
        assert_eq!(nav.stack(), &[Destination::Onboarding]);
        assert!(!nav.back());
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = Navigator::new(Destination::Home);
        nav.navigate(Destination::Home);
        assert_eq!(nav.stack().len(), 1);
    }
}
