//! Controller behavior against an in-memory API and page

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dhaba_client::{ClientError, ClientResult, OrderApi};
use dhaba_desk::{Controller, Field, Page, Region};
use rust_decimal::Decimal;
use shared::menu::MenuCatalog;
use shared::models::{
    CustomerRecord, OrderRecord, OrderSubmission, PlaceOrderResponse, ProcessedOrder,
};

#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<String>>,
    history: Vec<OrderRecord>,
    pending: Vec<OrderRecord>,
    todays: Vec<OrderRecord>,
    customers: Vec<CustomerRecord>,
    processed: Option<ProcessedOrder>,
    fail_place: bool,
    fail_pending: bool,
}

impl FakeApi {
    fn log(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderApi for FakeApi {
    async fn place_order(&self, order: &OrderSubmission) -> ClientResult<PlaceOrderResponse> {
        self.log(format!("place_order total={:.2}", order.total_amount));
        if self.fail_place {
            return Err(ClientError::Internal("boom".to_string()));
        }
        Ok(PlaceOrderResponse {
            order_id: 7,
            message: None,
        })
    }

    async fn process_next_order(&self) -> ClientResult<ProcessedOrder> {
        self.log("process_order");
        self.processed
            .clone()
            .ok_or_else(|| ClientError::NotFound("No pending orders".to_string()))
    }

    async fn order_history(&self, mobile_number: Option<&str>) -> ClientResult<Vec<OrderRecord>> {
        self.log(format!("order_history mobile={mobile_number:?}"));
        Ok(self.history.clone())
    }

    async fn customer_records(&self) -> ClientResult<Vec<CustomerRecord>> {
        self.log("customer_records");
        Ok(self.customers.clone())
    }

    async fn pending_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.log("pending_orders");
        if self.fail_pending {
            return Err(ClientError::Internal("boom".to_string()));
        }
        Ok(self.pending.clone())
    }

    async fn todays_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.log("todays_orders");
        Ok(self.todays.clone())
    }
}

fn record(order_id: i64, mobile: Option<&str>, total: Decimal) -> OrderRecord {
    OrderRecord {
        order_id,
        customer_name: "Asha".to_string(),
        mobile_number: mobile.map(str::to_string),
        table_number: Some("4".to_string()),
        items: Vec::new(),
        total_amount: total,
        timestamp: None,
    }
}

fn setup(api: FakeApi) -> (Arc<FakeApi>, Controller<Page>) {
    let api = Arc::new(api);
    let controller = Controller::new(api.clone(), MenuCatalog::standard(), Page::full());
    (api, controller)
}

#[tokio::test]
async fn submitting_with_no_items_never_hits_the_network() {
    let (api, mut controller) = setup(FakeApi::default());

    controller.submit_order("Asha", "4", "9876543210").await;

    assert!(api.calls().is_empty());
    assert_eq!(
        controller.views().alerts(),
        ["Please select at least one item"]
    );
}

#[tokio::test]
async fn submitting_without_a_table_never_hits_the_network() {
    let (api, mut controller) = setup(FakeApi::default());

    controller.adjust_quantity("pizza", 1);
    controller.submit_order("Asha", "  ", "9876543210").await;

    assert!(api.calls().is_empty());
    assert_eq!(controller.views().alerts(), ["Please select a table number"]);
}

#[tokio::test]
async fn malformed_mobile_numbers_never_hit_the_network() {
    for mobile in ["12345", "abcdefghij", "123456789012"] {
        let (api, mut controller) = setup(FakeApi::default());
        controller.adjust_quantity("pizza", 1);
        controller.submit_order("Asha", "4", mobile).await;

        assert!(api.calls().is_empty(), "request issued for {mobile:?}");
        assert_eq!(
            controller.views().alerts(),
            ["Please enter a valid 10-digit mobile number"]
        );
    }
}

#[tokio::test]
async fn leading_zero_mobile_number_passes() {
    let (api, mut controller) = setup(FakeApi::default());
    controller.adjust_quantity("pizza", 1);
    controller.submit_order("Asha", "4", "0123456789").await;

    assert_eq!(api.calls()[0], "place_order total=499.00");
}

#[tokio::test]
async fn successful_submission_resets_the_draft_and_scopes_the_refresh() {
    let (api, mut controller) = setup(FakeApi::default());
    controller.adjust_quantity("veg-burger", 2);
    controller.adjust_quantity("pizza", 1);
    assert_eq!(controller.views().field(Field::OrderTotal), Some("897.00"));

    controller.submit_order("Asha", "4", "9876543210").await;

    assert!(controller.draft().is_empty());
    assert_eq!(controller.views().field(Field::OrderTotal), Some("0.00"));
    assert_eq!(
        controller.views().alerts(),
        ["Order #7 placed successfully!"]
    );

    let calls = api.calls();
    assert_eq!(calls[0], "place_order total=897.00");
    assert!(calls.contains(&"order_history mobile=Some(\"9876543210\")".to_string()));
    assert!(calls.contains(&"customer_records".to_string()));
    assert!(calls.contains(&"pending_orders".to_string()));
}

#[tokio::test]
async fn failed_submission_keeps_the_draft_for_retry() {
    let (api, mut controller) = setup(FakeApi {
        fail_place: true,
        ..FakeApi::default()
    });
    controller.adjust_quantity("veg-burger", 2);

    controller.submit_order("Asha", "4", "9876543210").await;

    assert_eq!(controller.draft().quantity("veg-burger"), 2);
    assert_eq!(
        controller.views().alerts(),
        ["Error placing order. Please try again."]
    );
    // No refresh after a rejected submission
    assert_eq!(api.calls(), ["place_order total=398.00"]);
}

#[tokio::test]
async fn refresh_is_all_or_nothing() {
    let (_, mut controller) = setup(FakeApi {
        history: vec![record(1, None, Decimal::from(499))],
        customers: vec![CustomerRecord {
            customer_name: "Asha".to_string(),
            total_orders: 1,
            total_spent: Decimal::from(499),
        }],
        fail_pending: true,
        ..FakeApi::default()
    });

    let result = controller.refresh_front_desk(None).await;

    assert!(result.is_err());
    // Nothing was rendered even though two of the three fetches succeeded
    assert_eq!(controller.views().region(Region::OrderHistory), Some(""));
    assert_eq!(controller.views().region(Region::CustomerRecords), Some(""));
    assert_eq!(controller.views().region(Region::PendingOrders), Some(""));
}

#[tokio::test]
async fn load_renders_placeholders_for_empty_lists() {
    let (_, mut controller) = setup(FakeApi::default());

    controller.load().await;

    assert_eq!(
        controller.views().region(Region::OrderHistory),
        Some("<p class=\"empty\">No past orders yet</p>")
    );
    assert_eq!(
        controller.views().region(Region::PendingOrders),
        Some("<p class=\"empty\">No pending orders</p>")
    );
    assert_eq!(controller.views().field(Field::OrderTotal), Some("0.00"));
}

#[tokio::test]
async fn process_next_scopes_history_to_the_processed_order() {
    let (api, mut controller) = setup(FakeApi {
        processed: Some(ProcessedOrder {
            order_id: 3,
            customer_name: "Ravi".to_string(),
            order: record(3, Some("9000000001"), Decimal::from(89)),
        }),
        ..FakeApi::default()
    });

    controller.process_next().await;

    assert_eq!(
        controller.views().alerts(),
        ["Order #3 for Ravi processed successfully!"]
    );
    let calls = api.calls();
    assert_eq!(calls[0], "process_order");
    assert!(calls.contains(&"order_history mobile=Some(\"9000000001\")".to_string()));
}

#[tokio::test]
async fn process_next_failure_changes_nothing() {
    let (api, mut controller) = setup(FakeApi::default());

    controller.process_next().await;

    assert_eq!(
        controller.views().alerts(),
        ["Error processing order. Please try again."]
    );
    assert_eq!(api.calls(), ["process_order"]);
    assert_eq!(controller.views().region(Region::OrderHistory), Some(""));
}

#[tokio::test]
async fn dashboard_refresh_recomputes_stats() {
    let (_, mut controller) = setup(FakeApi {
        todays: vec![
            record(1, None, Decimal::new(15050, 2)),
            record(2, None, Decimal::ZERO),
        ],
        customers: vec![
            CustomerRecord {
                customer_name: "A".to_string(),
                total_orders: 1,
                total_spent: Decimal::new(15050, 2),
            },
            CustomerRecord {
                customer_name: "B".to_string(),
                total_orders: 1,
                total_spent: Decimal::ZERO,
            },
        ],
        ..FakeApi::default()
    });

    controller.refresh_dashboard().await.unwrap();

    assert_eq!(controller.views().field(Field::TotalOrders), Some("2"));
    assert_eq!(controller.views().field(Field::TotalRevenue), Some("150.50"));
    assert_eq!(controller.views().field(Field::TotalCustomers), Some("2"));
    assert!(
        controller
            .views()
            .region(Region::TodaysOrders)
            .unwrap()
            .contains("Order #1")
    );
}
