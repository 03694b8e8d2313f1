//! Order-state engine
//!
//! - **service**: `OrderService`, the per-client owner of the order book
//! - **appliers**: one pure applier per order mutation (add, quantity, ...)
//! - **restack**: the pass that re-establishes one row per (code, comment)
//! - **storage**: redb-based persistence for orders and session markers
//! - **backend**: local write-through or the shared document store
//! - **sync**: reconciliation of inbound snapshots
//!
//! # Architecture
//!
//! ```text
//! keystroke → OrderService → OrderMutation → Order (in memory)
//!                                                 ↓
//!                                   Backend (local redb | shared store)
//!                                                 ↓
//!                         shared only: snapshot broadcast → reconcile
//! ```

pub mod traits;

pub mod appliers;
pub mod backend;
pub mod restack;
pub mod service;
pub mod session;
pub mod shared_store;
pub mod storage;
pub mod sync;

// Re-exports
pub use appliers::OrderMutation;
pub use backend::{Backend, LocalBackend, OrderBackend};
pub use restack::restack;
pub use service::{OrderService, SearchHit, SearchOutcome, ServiceError, ServiceResult};
pub use session::SessionStore;
pub use shared_store::{DocumentStore, SharedBackend};
pub use storage::{OrderStorage, StorageError, StorageResult};
pub use sync::{reconcile, LastTouch, Reconciliation, TOUCH_WINDOW_MS};
