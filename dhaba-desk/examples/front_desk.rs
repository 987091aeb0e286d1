//! Front-desk walkthrough against a live order server
//!
//! Composes a small order, submits it, processes the oldest pending order,
//! and leaves the 30-second dashboard poll running for a while.
//!
//! Run: cargo run --example front_desk -- http://localhost:5000

use std::sync::Arc;
use std::time::Duration;

use dhaba_client::ClientConfig;
use dhaba_desk::{Controller, DashboardMonitor, Page, Region};
use shared::menu::MenuCatalog;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let api = Arc::new(ClientConfig::new(base_url).build_http_client());

    let mut controller = Controller::new(api, MenuCatalog::standard(), Page::full());
    controller.load().await;

    controller.adjust_quantity("veg-burger", 2);
    controller.adjust_quantity("pizza", 1);
    controller.submit_order("Asha", "7", "9876543210").await;

    controller.process_next().await;

    if let Some(markup) = controller.views().region(Region::PendingOrders) {
        println!("--- pending orders ---\n{markup}");
    }

    // Hand the controller to the dashboard poll and let it tick a few times
    let controller = Arc::new(RwLock::new(controller));
    tokio::spawn(DashboardMonitor::new(controller.clone()).start());
    tokio::time::sleep(Duration::from_secs(90)).await;

    let snapshot = controller.read().await;
    if let Some(markup) = snapshot.views().region(Region::TodaysOrders) {
        println!("--- today's orders ---\n{markup}");
    }
    Ok(())
}
