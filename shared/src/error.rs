//! Error types for the shared crate

use crate::models::TableId;
use thiserror::Error;

/// Rejected user input
///
/// Raised before any state change; the caller reports it and aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Table number is required")]
    MissingTableNumber,

    #[error("Invalid number: {0}")]
    InvalidTableNumber(String),

    #[error("Table number must be greater than 0")]
    NonPositiveTableNumber,

    #[error("Table {0} already exists")]
    TableExists(TableId),
}
