//! Controller and event wiring
//!
//! Glues user interaction (stepper clicks, form submission, the process
//! action) to draft mutation, API calls, and view rendering. Each refresh
//! cycle issues its fetches concurrently and renders only once all of them
//! have resolved, so a partial update is never shown.

use std::sync::Arc;

use dhaba_client::{ClientResult, OrderApi};
use shared::menu::MenuCatalog;
use shared::models::OrderSubmission;

use crate::draft::OrderDraft;
use crate::render;
use crate::stats::DashboardStats;
use crate::view::{Field, Region, ViewBindings};

/// Glue between user interaction, the order draft, the API, and the views
pub struct Controller<V: ViewBindings> {
    api: Arc<dyn OrderApi>,
    draft: OrderDraft,
    views: V,
}

impl<V: ViewBindings> Controller<V> {
    pub fn new(api: Arc<dyn OrderApi>, catalog: MenuCatalog, views: V) -> Self {
        Self {
            api,
            draft: OrderDraft::new(catalog),
            views,
        }
    }

    /// Stepper click: change one item's quantity and re-render the total
    pub fn adjust_quantity(&mut self, item_id: &str, delta: i32) {
        self.draft.adjust(item_id, delta);
        self.render_total();
    }

    /// Current draft (read-only)
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// The bound views, for inspection
    pub fn views(&self) -> &V {
        &self.views
    }

    /// Initial page load: unscoped refresh of the front-desk lists
    pub async fn load(&mut self) {
        self.render_total();
        if let Err(e) = self.refresh_front_desk(None).await {
            tracing::error!("Error initializing data: {e}");
        }
    }

    /// Submit the composed order
    ///
    /// Validation runs in order (items, table, mobile number); the first
    /// failing check alerts and returns without touching the network. A
    /// rejected submission keeps the draft so the user can retry.
    pub async fn submit_order(
        &mut self,
        customer_name: &str,
        table_number: &str,
        mobile_number: &str,
    ) {
        if self.draft.is_empty() {
            self.views.alert("Please select at least one item");
            return;
        }
        if table_number.trim().is_empty() {
            self.views.alert("Please select a table number");
            return;
        }
        if !is_valid_mobile(mobile_number) {
            self.views.alert("Please enter a valid 10-digit mobile number");
            return;
        }

        let submission = OrderSubmission {
            customer_name: customer_name.to_string(),
            table_number: table_number.to_string(),
            mobile_number: mobile_number.to_string(),
            items: self.draft.line_items(),
            total_amount: self.draft.total(),
        };

        tracing::debug!(total = %submission.total_amount, "submitting order");
        match self.api.place_order(&submission).await {
            Ok(placed) => {
                self.views
                    .alert(&format!("Order #{} placed successfully!", placed.order_id));
                if let Err(e) = self.refresh_front_desk(Some(mobile_number)).await {
                    tracing::error!("Error refreshing data: {e}");
                }
                // The order is on the server now; a draft kept around here
                // would risk a double submission
                self.draft.reset();
                self.render_total();
            }
            Err(e) => {
                tracing::error!("Error placing order: {e}");
                self.views.alert("Error placing order. Please try again.");
            }
        }
    }

    /// Manager action: mark the oldest pending order as processed
    pub async fn process_next(&mut self) {
        match self.api.process_next_order().await {
            Ok(processed) => {
                let mobile = processed.order.mobile_number.clone();
                if let Err(e) = self.refresh_front_desk(mobile.as_deref()).await {
                    tracing::error!("Error refreshing data: {e}");
                }
                self.views.alert(&format!(
                    "Order #{} for {} processed successfully!",
                    processed.order_id, processed.customer_name
                ));
            }
            Err(e) => {
                tracing::error!("Error processing order: {e}");
                self.views.alert("Error processing order. Please try again.");
            }
        }
    }

    /// One front-desk refresh cycle
    ///
    /// History (optionally scoped to a mobile number), customer records and
    /// pending orders are fetched concurrently; any failure aborts the
    /// cycle before anything is rendered.
    pub async fn refresh_front_desk(&mut self, mobile_number: Option<&str>) -> ClientResult<()> {
        let (history, customers, pending) = tokio::try_join!(
            self.api.order_history(mobile_number),
            self.api.customer_records(),
            self.api.pending_orders(),
        )?;

        self.views
            .set_region(Region::OrderHistory, render::order_history(&history));
        self.views
            .set_region(Region::CustomerRecords, render::customer_records(&customers));
        self.views
            .set_region(Region::PendingOrders, render::pending_orders(&pending));
        Ok(())
    }

    /// One manager-dashboard refresh cycle
    ///
    /// Today's orders and customer records are fetched concurrently; the
    /// stats are recomputed from scratch on success.
    pub async fn refresh_dashboard(&mut self) -> ClientResult<()> {
        let (todays, customers) =
            tokio::try_join!(self.api.todays_orders(), self.api.customer_records())?;

        let stats = DashboardStats::derive(&todays, &customers);
        self.views
            .set_region(Region::TodaysOrders, render::todays_orders(&todays));
        self.views
            .set_region(Region::CustomerRecords, render::customer_records(&customers));
        self.views
            .set_field(Field::TotalOrders, stats.total_orders.to_string());
        self.views
            .set_field(Field::TotalRevenue, format!("{:.2}", stats.total_revenue));
        self.views
            .set_field(Field::TotalCustomers, stats.total_customers.to_string());
        Ok(())
    }

    fn render_total(&mut self) {
        self.views
            .set_field(Field::OrderTotal, format!("{:.2}", self.draft.total()));
    }
}

/// Exactly ten ASCII digits
fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::is_valid_mobile;

    #[test]
    fn mobile_number_pattern() {
        assert!(is_valid_mobile("0123456789"));
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("12345"));
        assert!(!is_valid_mobile("abcdefghij"));
        assert!(!is_valid_mobile("123456789012"));
        assert!(!is_valid_mobile("12345 6789"));
        assert!(!is_valid_mobile(""));
    }
}
