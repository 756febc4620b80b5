//! Wire types for the menu JSON document.
//!
//! ```json
//! {
//!   "menu": [
//!     {
//!       "id": 1,
//!       "title": "Greek Salad",
//!       "description": "The famous greek salad of crispy lettuce, ...",
//!       "price": "10",
//!       "image": "https://.../greekSalad.jpg",
//!       "category": "starters"
//!     }
//!   ]
//! }
//! ```

use serde::Deserialize;

use little_lemon_core::{MenuItem, MenuItemId, Price};

/// Top-level menu document.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuDocument {
    #[serde(rename = "menu")]
    pub items: Vec<MenuItemPayload>,
}

/// One menu entry as sent by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemPayload {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// String (`"10"`) or number (`10.5`).
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl From<MenuItemPayload> for MenuItem {
    fn from(payload: MenuItemPayload) -> Self {
        Self {
            id: MenuItemId::new(payload.id),
            title: payload.title,
            price: payload.price,
            description: payload.description,
            category: payload.category,
            image: payload.image,
        }
    }
}

impl MenuDocument {
    /// Convert into domain menu items, keeping server order.
    #[must_use]
    pub fn into_items(self) -> Vec<MenuItem> {
        self.items.into_iter().map(MenuItem::from).collect()
    }
}
