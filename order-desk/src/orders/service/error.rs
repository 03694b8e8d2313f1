use super::super::storage::StorageError;
use thiserror::Error;

/// Service errors
///
/// Only loading the order book at startup can fail hard. Once running,
/// persistence failures are logged and the in-memory state stays as it is.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
