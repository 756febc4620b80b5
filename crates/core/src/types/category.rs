//! Menu categories offered as filters on the home screen.
//!
//! Menu items carry their category as free text; the app only knows these four
//! labels and compares them case-insensitively.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed menu category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Starters,
    Mains,
    Desserts,
    Drinks,
}

/// Returned when a string names none of the [`MenuCategory`] labels.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0} (expected starters, mains, desserts or drinks)")]
pub struct UnknownCategory(pub String);

impl MenuCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Starters, Self::Mains, Self::Desserts, Self::Drinks];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::Mains => "Mains",
            Self::Desserts => "Desserts",
            Self::Drinks => "Drinks",
        }
    }

    /// Whether a free-text item category belongs to this label.
    #[must_use]
    pub fn matches(self, category: &str) -> bool {
        category.eq_ignore_ascii_case(self.label())
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.matches(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}
