//! Periodic dashboard refresh
//!
//! Drives the manager dashboard on a fixed cadence, independent of the
//! order form. Starts on page load and runs indefinitely; a failed cycle
//! is logged and the next tick proceeds.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::interval;

use crate::controller::Controller;
use crate::view::ViewBindings;

/// Fixed refresh period of the manager dashboard
pub const REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Periodic driver of the manager-dashboard refresh cycle
///
/// Cycles run under the controller's write lock, so a slow cycle delays
/// the next tick rather than racing it over the same regions.
pub struct DashboardMonitor<V: ViewBindings> {
    controller: Arc<RwLock<Controller<V>>>,
    period: Duration,
}

impl<V: ViewBindings> DashboardMonitor<V> {
    /// Create a monitor with the standard 30-second period
    pub fn new(controller: Arc<RwLock<Controller<V>>>) -> Self {
        Self::with_period(controller, REFRESH_PERIOD)
    }

    /// Create a monitor with a custom period
    pub fn with_period(controller: Arc<RwLock<Controller<V>>>, period: Duration) -> Self {
        Self { controller, period }
    }

    /// Run the refresh loop
    ///
    /// Never returns; spawn it alongside the event wiring.
    pub async fn start(self) {
        let mut ticker = interval(self.period);

        loop {
            ticker.tick().await;

            let mut controller = self.controller.write().await;
            if let Err(e) = controller.refresh_dashboard().await {
                tracing::warn!("Dashboard refresh failed: {e}");
            }
        }
    }
}
