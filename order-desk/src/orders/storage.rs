//! redb-based storage layer for table orders
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | table number | `Order` (JSON) | One row per existing table |
//! | `session` | `&str` | `u32` | Client session markers (active table) |
//!
//! A table exists exactly when it has a row in `orders`; an empty order is
//! stored as `{"items": []}`.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `commit()` returns the
//! write survives a crash or a power cut, which is what a tablet left on a
//! restaurant counter needs.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::{Order, OrderBook, TableId};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Orders per table: key = table number, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<u32, &[u8]> = TableDefinition::new("orders");

/// Session markers: key = marker name, value = table number
const SESSION_TABLE: TableDefinition<&str, u32> = TableDefinition::new("session");

const ACTIVE_TABLE_KEY: &str = "active_table";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Shared store disconnected")]
    Disconnected,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Order storage backed by redb
#[derive(Clone)]
pub struct OrderStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for OrderStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStorage").finish_non_exhaustive()
    }
}

impl OrderStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and throwaway shared stores)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create all tables if they don't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Order Operations ==========

    /// Load every table with its order
    pub fn load_all(&self) -> StorageResult<OrderBook> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut book = OrderBook::new();
        for result in table.iter()? {
            let (key, value) = result?;
            let Some(table_id) = TableId::new(key.value()) else {
                tracing::warn!("Skipping stored order for table 0");
                continue;
            };
            let order: Order = serde_json::from_slice(value.value())?;
            book.set_order(table_id, order);
        }

        Ok(book)
    }

    /// Get one table's order
    pub fn get_order(&self, table_id: TableId) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(table_id.get())? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Store (create or overwrite) a table's order
    pub fn store_order(&self, table_id: TableId, order: &Order) -> StorageResult<()> {
        let value = serde_json::to_vec(order)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            table.insert(table_id.get(), value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Remove a table and its order. Removing a missing table is not an error.
    pub fn remove_table(&self, table_id: TableId) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            table.remove(table_id.get())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Remove every table in one transaction
    pub fn remove_all(&self) -> StorageResult<usize> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            let keys: Vec<u32> = table
                .iter()?
                .map(|r| r.map(|(key, _)| key.value()))
                .collect::<Result<_, _>>()?;
            for key in &keys {
                table.remove(*key)?;
            }
            keys.len()
        };
        txn.commit()?;
        Ok(removed)
    }

    /// Write raw bytes as a table's order
    #[cfg(test)]
    pub(crate) fn store_raw(&self, key: u32, bytes: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            table.insert(key, bytes)?;
        }
        txn.commit()?;
        Ok(())
    }

    // ========== Session Markers ==========

    pub fn get_active_table(&self) -> StorageResult<Option<TableId>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;
        Ok(table
            .get(ACTIVE_TABLE_KEY)?
            .and_then(|guard| TableId::new(guard.value())))
    }

    pub fn set_active_table(&self, table_id: TableId) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SESSION_TABLE)?;
            table.insert(ACTIVE_TABLE_KEY, table_id.get())?;
        }
        txn.commit()?;
        Ok(())
    }

    pub fn clear_active_table(&self) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SESSION_TABLE)?;
            table.remove(ACTIVE_TABLE_KEY)?;
        }
        txn.commit()?;
        Ok(())
    }
}
