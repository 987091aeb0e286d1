//! Dashboard fragment rendering
//!
//! Pure mappings from fetched record arrays to HTML fragments. Empty input
//! renders an explicit placeholder so a refreshed region is never blank.
//! One parameterized card renderer serves all three order lists; the
//! mobile-number line appears only when the server sent one.

use shared::models::{CustomerRecord, OrderRecord};
use shared::money::format_rupees;

/// Whether an order card carries a process button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardStyle {
    Plain,
    Pending,
}

/// Render the order history list
pub fn order_history(orders: &[OrderRecord]) -> String {
    order_cards(orders, CardStyle::Plain, "No past orders yet")
}

/// Render the pending orders list, each card with a process button
pub fn pending_orders(orders: &[OrderRecord]) -> String {
    order_cards(orders, CardStyle::Pending, "No pending orders")
}

/// Render today's orders for the manager dashboard
pub fn todays_orders(orders: &[OrderRecord]) -> String {
    order_cards(orders, CardStyle::Plain, "No orders today yet")
}

/// Render the customer records list
pub fn customer_records(records: &[CustomerRecord]) -> String {
    if records.is_empty() {
        return placeholder("No customer records yet");
    }

    let mut out = String::new();
    for record in records {
        out.push_str("<div class=\"customer-card\">\n");
        out.push_str(&format!("  <h3>{}</h3>\n", record.customer_name));
        out.push_str(&format!("  <p>Total Orders: {}</p>\n", record.total_orders));
        out.push_str(&format!(
            "  <p>Total Spent: {}</p>\n",
            format_rupees(record.total_spent)
        ));
        out.push_str(&format!(
            "  <p>Average Order: {}</p>\n",
            format_rupees(record.average_spent())
        ));
        out.push_str("</div>\n");
    }
    out
}

fn order_cards(orders: &[OrderRecord], style: CardStyle, empty: &str) -> String {
    if orders.is_empty() {
        return placeholder(empty);
    }

    let mut out = String::new();
    for order in orders {
        let class = match style {
            CardStyle::Plain => "order-card",
            CardStyle::Pending => "order-card pending",
        };
        out.push_str(&format!("<div class=\"{class}\">\n"));
        out.push_str(&format!("  <h3>Order #{}</h3>\n", order.order_id));
        out.push_str(&format!("  <p>Customer: {}</p>\n", order.customer_name));
        if let Some(mobile) = &order.mobile_number {
            out.push_str(&format!("  <p>Mobile: {mobile}</p>\n"));
        }
        out.push_str(&format!(
            "  <p>Table: {}</p>\n",
            order.table_number.as_deref().unwrap_or("N/A")
        ));
        out.push_str(&format!(
            "  <p>Total: {}</p>\n",
            format_rupees(order.total_amount)
        ));
        out.push_str("  <div class=\"order-items\">\n");
        for item in &order.items {
            out.push_str(&format!(
                "    <div class=\"order-item\"><span>{}</span><span>{}x</span><span>{}</span></div>\n",
                item.name,
                item.quantity,
                format_rupees(item.price),
            ));
        }
        out.push_str("  </div>\n");
        if style == CardStyle::Pending {
            out.push_str("  <button class=\"process-btn\">Process Order</button>\n");
        }
        out.push_str("</div>\n");
    }
    out
}

fn placeholder(text: &str) -> String {
    format!("<p class=\"empty\">{text}</p>")
}
