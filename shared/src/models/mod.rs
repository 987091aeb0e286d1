//! Data models
//!
//! Wire types shared between the order server API and the client crates.
//! Field names match the server's JSON exactly (snake_case throughout).

pub mod customer;
pub mod order;

// Re-exports
pub use customer::*;
pub use order::*;
