//! Line Item Model

use super::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a line item
///
/// Minted once when the line item is created and never reused. Two line items
/// may share a code (same dish, different comments) but never a uid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemUid(String);

impl ItemUid {
    /// Mint a fresh uid
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemUid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemUid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemUid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One row in a table's order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Menu code
    pub code: u32,
    /// Display name copied from the menu
    pub name: String,
    /// Always >= 1 while the item is part of an order
    pub quantity: u32,
    /// Free-text comment, empty when none
    #[serde(default)]
    pub comment: String,
    pub uid: ItemUid,
}

impl LineItem {
    /// A single, uncommented unit of a menu item with a fresh uid
    pub fn from_menu(item: &MenuItem) -> Self {
        Self {
            code: item.code,
            name: item.name.clone(),
            quantity: 1,
            comment: String::new(),
            uid: ItemUid::new(),
        }
    }

    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty()
    }

    /// Same (code, comment) pair, i.e. the two rows belong in one stack
    pub fn stacks_with(&self, other: &LineItem) -> bool {
        self.code == other.code && self.comment == other.comment
    }
}
