//! Data models
//!
//! Shared between the engine and any front end.
//! Codes and table numbers are plain positive integers.

pub mod change;
pub mod line_item;
pub mod menu_item;
pub mod order;
pub mod table;

// Re-exports
pub use change::*;
pub use line_item::*;
pub use menu_item::*;
pub use order::*;
pub use table::*;
