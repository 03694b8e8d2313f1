//! Dining Table Model

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Table number (桌号), always greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TableId(u32);

impl TableId {
    /// `None` for zero
    pub fn new(number: u32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse a table number typed into the "new table" prompt
    pub fn parse_input(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingTableNumber);
        }
        let number: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::InvalidTableNumber(trimmed.to_string()))?;
        if number <= 0 {
            return Err(ValidationError::NonPositiveTableNumber);
        }
        u32::try_from(number)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ValidationError::InvalidTableNumber(trimmed.to_string()))
    }
}

impl TryFrom<u32> for TableId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ValidationError::NonPositiveTableNumber)
    }
}

impl From<TableId> for u32 {
    fn from(value: TableId) -> Self {
        value.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One card in the table list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub table_id: TableId,
    pub has_items: bool,
}
