//! Persistence backends
//!
//! The service writes through to a backend after every mutation. Two
//! variants exist:
//!
//! - **Local**: synchronous redb writes, no change notifications
//! - **Shared**: fire-and-forget writes to a [`DocumentStore`], plus a
//!   subscription delivering the full order book after every change made by
//!   any client
//!
//! [`DocumentStore`]: super::shared_store::DocumentStore

use enum_dispatch::enum_dispatch;
use shared::{Order, OrderBook, TableId};
use tokio::sync::broadcast;

use super::shared_store::SharedBackend;
use super::storage::{OrderStorage, StorageResult};

#[enum_dispatch]
pub trait OrderBackend {
    /// Every table with its order
    fn load_all(&self) -> StorageResult<OrderBook>;

    /// Create or overwrite one table's order
    fn save_order(&self, table_id: TableId, order: &Order) -> StorageResult<()>;

    /// Remove a table and its order
    fn delete_table(&self, table_id: TableId) -> StorageResult<()>;

    /// Remove every table
    fn delete_all(&self) -> StorageResult<()>;

    /// Inbound snapshots, `None` for backends without change notifications
    fn subscribe(&self) -> Option<broadcast::Receiver<OrderBook>>;
}

/// Local-only backend: write-through to the device's own redb file
#[derive(Debug, Clone)]
pub struct LocalBackend {
    storage: OrderStorage,
}

impl LocalBackend {
    pub fn new(storage: OrderStorage) -> Self {
        Self { storage }
    }
}

impl OrderBackend for LocalBackend {
    fn load_all(&self) -> StorageResult<OrderBook> {
        self.storage.load_all()
    }

    fn save_order(&self, table_id: TableId, order: &Order) -> StorageResult<()> {
        self.storage.store_order(table_id, order)
    }

    fn delete_table(&self, table_id: TableId) -> StorageResult<()> {
        self.storage.remove_table(table_id)
    }

    fn delete_all(&self) -> StorageResult<()> {
        let removed = self.storage.remove_all()?;
        tracing::info!(removed, "All tables removed from local storage");
        Ok(())
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<OrderBook>> {
        None
    }
}

/// Backend enum - dispatches to the configured variant
#[enum_dispatch(OrderBackend)]
#[derive(Debug, Clone)]
pub enum Backend {
    Local(LocalBackend),
    Shared(SharedBackend),
}

impl Backend {
    pub fn is_shared(&self) -> bool {
        matches!(self, Backend::Shared(_))
    }
}
