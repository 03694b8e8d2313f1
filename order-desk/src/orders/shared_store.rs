//! Shared real-time document store
//!
//! In-process stand-in for a networked document database. Clients hold a
//! [`SharedBackend`] handle; writes go over an unbounded channel to a single
//! writer task which applies them, persists them to redb and broadcasts the
//! full order book to every subscriber.
//!
//! # Data Flow
//!
//! ```text
//! client A ─ save_order ─┐
//!                        ├─> writer task ─> redb
//! client B ─ save_order ─┘        │
//!                                 └─> broadcast(OrderBook) ─> every client
//! ```
//!
//! Writes are applied in arrival order, so the last write to reach the store
//! wins per table.

use parking_lot::RwLock;
use shared::{Order, OrderBook, TableId};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

use super::backend::OrderBackend;
use super::storage::{OrderStorage, StorageError, StorageResult};

/// Snapshot broadcast channel capacity
///
/// Each message is a full snapshot, so a lagging client only needs the latest.
const SNAPSHOT_CHANNEL_CAPACITY: usize = 64;

/// One write sent to the store
#[derive(Debug, Clone)]
pub enum DocumentWrite {
    Save { table_id: TableId, order: Order },
    Delete { table_id: TableId },
    DeleteAll,
}

impl DocumentWrite {
    fn apply(&self, book: &mut OrderBook) {
        match self {
            DocumentWrite::Save { table_id, order } => book.set_order(*table_id, order.clone()),
            DocumentWrite::Delete { table_id } => {
                book.remove_table(*table_id);
            }
            DocumentWrite::DeleteAll => book.clear(),
        }
    }

    fn persist(&self, storage: &OrderStorage) -> StorageResult<()> {
        match self {
            DocumentWrite::Save { table_id, order } => storage.store_order(*table_id, order),
            DocumentWrite::Delete { table_id } => storage.remove_table(*table_id),
            DocumentWrite::DeleteAll => storage.remove_all().map(|_| ()),
        }
    }
}

/// The store itself; owns the writer task
#[derive(Debug)]
pub struct DocumentStore {
    book: Arc<RwLock<OrderBook>>,
    snapshot_tx: broadcast::Sender<OrderBook>,
    write_tx: mpsc::UnboundedSender<DocumentWrite>,
}

impl DocumentStore {
    /// Load the persisted book and spawn the writer task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(storage: OrderStorage) -> StorageResult<Self> {
        let initial = storage.load_all()?;
        tracing::info!(tables = initial.len(), "Shared document store started");

        let book = Arc::new(RwLock::new(initial));
        let (snapshot_tx, _) = broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY);
        let (write_tx, write_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_writer(
            storage,
            book.clone(),
            snapshot_tx.clone(),
            write_rx,
        ));

        Ok(Self {
            book,
            snapshot_tx,
            write_tx,
        })
    }

    /// Hand out a client connection
    pub fn connect(&self) -> SharedBackend {
        SharedBackend {
            book: self.book.clone(),
            snapshot_tx: self.snapshot_tx.clone(),
            write_tx: self.write_tx.clone(),
        }
    }

    /// Current state of the store
    pub fn snapshot(&self) -> OrderBook {
        self.book.read().clone()
    }
}

async fn run_writer(
    storage: OrderStorage,
    book: Arc<RwLock<OrderBook>>,
    snapshot_tx: broadcast::Sender<OrderBook>,
    mut write_rx: mpsc::UnboundedReceiver<DocumentWrite>,
) {
    while let Some(write) = write_rx.recv().await {
        let snapshot = {
            let mut book = book.write();
            write.apply(&mut book);
            book.clone()
        };

        if let Err(e) = write.persist(&storage) {
            tracing::error!(error = %e, write = ?write, "Failed to persist shared store write");
        }

        // No receivers is fine: nobody is listening right now
        let _ = snapshot_tx.send(snapshot);
    }
    tracing::debug!("Shared document store writer stopped");
}

/// A client's connection to the [`DocumentStore`]
#[derive(Debug, Clone)]
pub struct SharedBackend {
    book: Arc<RwLock<OrderBook>>,
    snapshot_tx: broadcast::Sender<OrderBook>,
    write_tx: mpsc::UnboundedSender<DocumentWrite>,
}

impl SharedBackend {
    fn send(&self, write: DocumentWrite) -> StorageResult<()> {
        self.write_tx
            .send(write)
            .map_err(|_| StorageError::Disconnected)
    }
}

impl OrderBackend for SharedBackend {
    fn load_all(&self) -> StorageResult<OrderBook> {
        Ok(self.book.read().clone())
    }

    fn save_order(&self, table_id: TableId, order: &Order) -> StorageResult<()> {
        self.send(DocumentWrite::Save {
            table_id,
            order: order.clone(),
        })
    }

    fn delete_table(&self, table_id: TableId) -> StorageResult<()> {
        self.send(DocumentWrite::Delete { table_id })
    }

    fn delete_all(&self) -> StorageResult<()> {
        self.send(DocumentWrite::DeleteAll)
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<OrderBook>> {
        Some(self.snapshot_tx.subscribe())
    }
}
