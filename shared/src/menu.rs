//! Menu catalog
//!
//! Fixed mapping from item id to display name and unit price, loaded once
//! at startup and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Unit price in currency units
    pub price: Decimal,
}

/// Ordered, immutable menu catalog
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Create a catalog from an ordered list of items
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The five-item sample menu
    pub fn standard() -> Self {
        fn entry(id: &str, name: &str, price: i64) -> MenuItem {
            MenuItem {
                id: id.to_string(),
                name: name.to_string(),
                price: Decimal::from(price),
            }
        }

        Self::new(vec![
            entry("veg-burger", "Veg Burger", 199),
            entry("chicken-burger", "Chicken Burger", 299),
            entry("french-fries", "French Fries", 149),
            entry("pizza", "Pizza", 499),
            entry("soft-drink", "Soft Drink", 89),
        ])
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Position of an item in catalog-definition order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Items in catalog-definition order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
