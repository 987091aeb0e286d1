//! Manager dashboard statistics

use rust_decimal::Decimal;
use shared::models::{CustomerRecord, OrderRecord};

/// Aggregates shown on the manager dashboard
///
/// Recomputed from scratch on every refresh cycle; nothing is accumulated
/// across cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_orders: usize,
    /// Revenue over today's orders in currency units
    pub total_revenue: Decimal,
    pub total_customers: usize,
}

impl DashboardStats {
    /// Derive stats from today's orders and the customer list
    ///
    /// Amounts the server sent in an unparsable form have already been
    /// decoded as zero, so they count as orders but add no revenue.
    pub fn derive(todays_orders: &[OrderRecord], customers: &[CustomerRecord]) -> Self {
        let total_revenue = todays_orders
            .iter()
            .map(|order| order.total_amount)
            .sum();

        Self {
            total_orders: todays_orders.len(),
            total_revenue,
            total_customers: customers.len(),
        }
    }
}
