//! Shared types for the Dhaba front-desk client
//!
//! Wire types exchanged with the order server plus the static menu
//! catalog and the money helpers used by the client crates.

pub mod menu;
pub mod models;
pub mod money;

// Re-exports
pub use menu::{MenuCatalog, MenuItem};
pub use models::{
    CustomerRecord, OrderLine, OrderRecord, OrderSubmission, PlaceOrderResponse, ProcessedOrder,
};
pub use serde::{Deserialize, Serialize};
