//! Order draft state
//!
//! One quantity slot per catalog entry; quantity 0 means "not in order".
//! Pure in-memory state - the controller reflects changes into the view.

use rust_decimal::Decimal;
use shared::menu::MenuCatalog;
use shared::models::OrderLine;

/// Mutable per-item quantities for the order currently being composed
#[derive(Debug, Clone)]
pub struct OrderDraft {
    catalog: MenuCatalog,
    quantities: Vec<u32>,
}

impl OrderDraft {
    /// Create an empty draft over the given catalog
    pub fn new(catalog: MenuCatalog) -> Self {
        let quantities = vec![0; catalog.len()];
        Self {
            catalog,
            quantities,
        }
    }

    /// Adjust one item's quantity by a signed delta, clamped at zero
    ///
    /// Unknown item ids are ignored.
    pub fn adjust(&mut self, item_id: &str, delta: i32) {
        if let Some(idx) = self.catalog.index_of(item_id) {
            let next = (i64::from(self.quantities[idx]) + i64::from(delta)).max(0);
            self.quantities[idx] = next.try_into().unwrap_or(u32::MAX);
        }
    }

    /// Current quantity for an item (0 for unknown ids)
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.catalog
            .index_of(item_id)
            .map(|idx| self.quantities[idx])
            .unwrap_or(0)
    }

    /// True when no item has been selected yet
    pub fn is_empty(&self) -> bool {
        self.quantities.iter().all(|&quantity| quantity == 0)
    }

    /// Order total over all selected items
    pub fn total(&self) -> Decimal {
        self.catalog
            .items()
            .iter()
            .zip(&self.quantities)
            .filter(|&(_, &quantity)| quantity > 0)
            .map(|(item, &quantity)| item.price * Decimal::from(quantity))
            .sum()
    }

    /// Selected items in catalog-definition order
    pub fn line_items(&self) -> Vec<OrderLine> {
        self.catalog
            .items()
            .iter()
            .zip(&self.quantities)
            .filter(|&(_, &quantity)| quantity > 0)
            .map(|(item, &quantity)| OrderLine {
                name: item.name.clone(),
                quantity,
                price: item.price,
            })
            .collect()
    }

    /// Reset every quantity to zero
    pub fn reset(&mut self) {
        self.quantities.fill(0);
    }

    /// The catalog this draft is composed over
    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }
}
