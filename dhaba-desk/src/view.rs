//! View bindings
//!
//! The UI boundary as an explicit interface instead of ambient document
//! lookups: named container regions and scalar fields the controller
//! writes rendered output into, plus blocking user-facing alerts.

use std::collections::HashMap;

/// Named container regions of the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    OrderHistory,
    CustomerRecords,
    PendingOrders,
    TodaysOrders,
}

/// Named scalar display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Running total of the order being composed
    OrderTotal,
    /// Manager stat: number of orders today
    TotalOrders,
    /// Manager stat: revenue over today's orders
    TotalRevenue,
    /// Manager stat: number of known customers
    TotalCustomers,
}

/// Surface the controller writes into
pub trait ViewBindings: Send {
    /// Replace the markup of a container region
    ///
    /// Implementations no-op when the region is absent from the page.
    fn set_region(&mut self, region: Region, markup: String);

    /// Update a scalar display field
    fn set_field(&mut self, field: Field, value: String);

    /// Show a blocking user-facing message
    fn alert(&mut self, message: &str);
}

/// In-memory page holding the regions a concrete page actually has
///
/// Used by the example binary and the tests; a real embedding would
/// implement [`ViewBindings`] over its own widget tree.
#[derive(Debug, Default)]
pub struct Page {
    regions: HashMap<Region, String>,
    fields: HashMap<Field, String>,
    alerts: Vec<String>,
}

impl Page {
    /// Page with the given container regions present
    pub fn with_regions(regions: &[Region]) -> Self {
        Self {
            regions: regions.iter().map(|&region| (region, String::new())).collect(),
            fields: HashMap::new(),
            alerts: Vec::new(),
        }
    }

    /// Page with all four dashboard regions present
    pub fn full() -> Self {
        Self::with_regions(&[
            Region::OrderHistory,
            Region::CustomerRecords,
            Region::PendingOrders,
            Region::TodaysOrders,
        ])
    }

    /// Current markup of a region, if the page has it
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Current value of a field
    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Messages shown so far, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl ViewBindings for Page {
    fn set_region(&mut self, region: Region, markup: String) {
        // Absent containers are silently skipped
        if let Some(slot) = self.regions.get_mut(&region) {
            *slot = markup;
        }
    }

    fn set_field(&mut self, field: Field, value: String) {
        self.fields.insert(field, value);
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(alert = message);
        self.alerts.push(message.to_string());
    }
}
