//! Home screen: hero copy, search and category filters over the menu.
//!
//! Filtering happens here, over the full row set from the item store.

use little_lemon_core::{MenuCategory, MenuItem};

pub const RESTAURANT_NAME: &str = "Little Lemon";
pub const RESTAURANT_LOCATION: &str = "Chicago";
pub const RESTAURANT_TAGLINE: &str = "We are a family owned Mediterranean restaurant, focused on traditional recipes served with a modern twist.";
pub const ORDER_HEADING: &str = "ORDER FOR DELIVERY!";

/// Search phrase and category chip selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    search_phrase: String,
    category: Option<MenuCategory>,
}

impl MenuFilter {
    /// Filter that lets everything through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with both predicates preset.
    #[must_use]
    pub fn with(search_phrase: impl Into<String>, category: Option<MenuCategory>) -> Self {
        Self {
            search_phrase: search_phrase.into(),
            category,
        }
    }

    pub fn set_search_phrase(&mut self, phrase: impl Into<String>) {
        self.search_phrase = phrase.into();
    }

    #[must_use]
    pub fn search_phrase(&self) -> &str {
        &self.search_phrase
    }

    #[must_use]
    pub const fn category(&self) -> Option<MenuCategory> {
        self.category
    }

    /// Tap a category chip: selects it, or clears it if it was selected.
    pub fn toggle_category(&mut self, category: MenuCategory) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    /// Whether `item` passes both predicates.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        item.title_contains(&self.search_phrase)
            && self.category.is_none_or(|c| item.in_category(c))
    }

    /// Items passing the filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// A category chip as shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryChip {
    pub category: MenuCategory,
    pub selected: bool,
}

/// Chips for every category, in display order.
#[must_use]
pub fn category_chips(filter: &MenuFilter) -> Vec<CategoryChip> {
    MenuCategory::ALL
        .into_iter()
        .map(|category| CategoryChip {
            category,
            selected: filter.category() == Some(category),
        })
        .collect()
}
