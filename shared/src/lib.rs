//! Shared types for the order desk
//!
//! Domain models used by the engine, the storage layer and any front end:
//! menu items, line items, per-table orders and the validation errors raised
//! while creating tables.

pub mod error;
pub mod models;

// Re-exports
pub use error::ValidationError;
pub use models::{
    ChangeHint, ChangeKind, ItemUid, LineItem, MenuItem, Order, OrderBook, TableId, TableSummary,
};
pub use serde::{Deserialize, Serialize};
