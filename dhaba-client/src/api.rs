//! Order server API surface
//!
//! `OrderApi` is the seam between the view-sync layer and the network: the
//! controller talks to this trait, `HttpClient` implements it over HTTP.

use async_trait::async_trait;
use shared::models::{
    CustomerRecord, OrderRecord, OrderSubmission, PlaceOrderResponse, ProcessedOrder,
};

use crate::ClientResult;

/// The six order-server operations
///
/// Every operation propagates failures to the caller; none retries or
/// swallows an error.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Submit a freshly composed order
    async fn place_order(&self, order: &OrderSubmission) -> ClientResult<PlaceOrderResponse>;

    /// Mark the oldest pending order as processed
    ///
    /// Fails with `ClientError::NotFound` when no order is pending.
    async fn process_next_order(&self) -> ClientResult<ProcessedOrder>;

    /// Fetch the order history, optionally filtered by mobile number
    async fn order_history(&self, mobile_number: Option<&str>) -> ClientResult<Vec<OrderRecord>>;

    /// Fetch the per-customer aggregates
    async fn customer_records(&self) -> ClientResult<Vec<CustomerRecord>>;

    /// Fetch orders waiting for the kitchen
    async fn pending_orders(&self) -> ClientResult<Vec<OrderRecord>>;

    /// Fetch orders placed today (manager dashboard)
    async fn todays_orders(&self) -> ClientResult<Vec<OrderRecord>>;
}
