//! Menu item record.

use serde::{Deserialize, Serialize};

use super::{MenuCategory, MenuItemId, Price};

/// A single dish on the menu.
///
/// Immutable once imported from the remote menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub price: Price,
    pub description: String,
    /// Free-text category as sent by the remote menu (e.g. `"mains"`).
    pub category: String,
    /// Image URL.
    pub image: String,
}

impl MenuItem {
    /// Case-insensitive substring match on the title.
    ///
    /// An empty or blank phrase matches everything.
    #[must_use]
    pub fn title_contains(&self, phrase: &str) -> bool {
        phrase.trim().is_empty() || self.title.to_lowercase().contains(&phrase.to_lowercase())
    }

    /// Whether the item belongs to `category`, ignoring case.
    #[must_use]
    pub fn in_category(&self, category: MenuCategory) -> bool {
        category.matches(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, category: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(1),
            title: title.to_owned(),
            price: Price::from_cents(500),
            description: String::new(),
            category: category.to_owned(),
            image: String::new(),
        }
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let salad = item("Greek Salad", "starters");
        assert!(salad.title_contains("greek"));
        assert!(salad.title_contains("SALAD"));
        assert!(salad.title_contains(""));
        assert!(!salad.title_contains("pasta"));
    }

    #[test]
    fn test_in_category() {
        assert!(item("Lemon Dessert", "Desserts").in_category(MenuCategory::Desserts));
        assert!(!item("Lemon Dessert", "desserts").in_category(MenuCategory::Drinks));
    }
}
