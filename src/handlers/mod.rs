//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the item service.
//!
//! ## Available Handlers
//!
//! - **Items** (`items`) - CRUD operations over the item collection
//! - **Fast** (`fast`) - Latency-baseline probe
//! - **Metrics** (`metrics`) - Prometheus text exposition

pub mod fast;
pub mod items;
pub mod metrics;

pub use fast::{FastResponse, fast};
pub use items::{
    ItemPayload, ItemResponse, MessageResponse, create_item, delete_item, list_items, update_item,
};
pub use metrics::metrics;
