//! Customer record model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// Per-customer aggregate kept by the server
///
/// Read-only projection; refetched whole on every refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_name: String,
    #[serde(default)]
    pub total_orders: u32,
    /// Total spent in currency units
    #[serde(deserialize_with = "money::lossy", default)]
    pub total_spent: Decimal,
}

impl CustomerRecord {
    /// Average spend per order
    ///
    /// Zero when the customer has no orders yet, so rendering never has to
    /// deal with a division by zero.
    pub fn average_spent(&self) -> Decimal {
        if self.total_orders == 0 {
            Decimal::ZERO
        } else {
            self.total_spent / Decimal::from(self.total_orders)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn average_is_guarded_for_zero_orders() {
        let record = CustomerRecord {
            customer_name: "Asha".to_string(),
            total_orders: 0,
            total_spent: Decimal::from(500),
        };
        assert_eq!(record.average_spent(), Decimal::ZERO);
    }

    #[test]
    fn average_over_orders() {
        let record = CustomerRecord {
            customer_name: "Ravi".to_string(),
            total_orders: 4,
            total_spent: Decimal::from(998),
        };
        assert_eq!(record.average_spent(), Decimal::new(24950, 2));
    }

    #[test]
    fn decodes_server_shape() {
        let record: CustomerRecord = serde_json::from_value(json!({
            "order_id": 1,
            "customer_name": "Meera",
            "total_orders": 2,
            "total_spent": 598.0,
        }))
        .unwrap();
        assert_eq!(record.total_orders, 2);
        assert_eq!(record.total_spent, Decimal::from(598));
    }
}
