//! Order wire types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// One line item of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    /// Unit price in currency units
    pub price: Decimal,
}

/// Request body for placing an order
///
/// Built fresh from the draft on each submission and discarded once the
/// request resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub customer_name: String,
    pub table_number: String,
    pub mobile_number: String,
    pub items: Vec<OrderLine>,
    /// Total amount in currency units
    pub total_amount: Decimal,
}

/// Archived or pending order as returned by the server
///
/// Read-only snapshot; fetched and discarded on every refresh cycle.
/// Mobile number and timestamp are only present on newer servers, so both
/// stay optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: i64,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    /// Total amount in currency units
    #[serde(deserialize_with = "money::lossy", default)]
    pub total_amount: Decimal,
    /// Unix timestamp of order creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

/// Response of place_order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub order_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of process_order: the dequeued order plus its headline fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedOrder {
    pub order_id: i64,
    pub customer_name: String,
    pub order: OrderRecord,
}
