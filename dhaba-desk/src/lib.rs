//! Dhaba Desk - client-state and view synchronization
//!
//! Owns the in-progress order draft, renders dashboard fragments from
//! server snapshots, and wires user actions plus the periodic dashboard
//! poll to the order server API.

pub mod controller;
pub mod draft;
pub mod monitor;
pub mod render;
pub mod stats;
pub mod view;

pub use controller::Controller;
pub use draft::OrderDraft;
pub use monitor::DashboardMonitor;
pub use stats::DashboardStats;
pub use view::{Field, Page, Region, ViewBindings};
