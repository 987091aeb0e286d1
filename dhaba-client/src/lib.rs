//! Dhaba Client - HTTP client for the order server
//!
//! Provides network-based HTTP calls to the order server API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::OrderApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{
    CustomerRecord, OrderRecord, OrderSubmission, PlaceOrderResponse, ProcessedOrder,
};
