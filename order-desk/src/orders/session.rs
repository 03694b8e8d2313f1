//! Session storage
//!
//! Remembers which table this client has open so that a restart resumes it.
//! The marker is per client: in shared mode every device keeps its own.

use super::storage::{OrderStorage, StorageResult};
use shared::TableId;

pub trait SessionStore: Send + Sync {
    fn get_active_table(&self) -> StorageResult<Option<TableId>>;
    fn set_active_table(&self, table_id: TableId) -> StorageResult<()>;
    fn clear_active_table(&self) -> StorageResult<()>;
}

impl SessionStore for OrderStorage {
    fn get_active_table(&self) -> StorageResult<Option<TableId>> {
        OrderStorage::get_active_table(self)
    }

    fn set_active_table(&self, table_id: TableId) -> StorageResult<()> {
        OrderStorage::set_active_table(self, table_id)
    }

    fn clear_active_table(&self) -> StorageResult<()> {
        OrderStorage::clear_active_table(self)
    }
}
