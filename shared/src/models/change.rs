//! Render hints attached to order mutations

use super::ItemUid;
use serde::{Deserialize, Serialize};

/// What happened to the touched row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    /// A row was created
    New,
    /// An existing row's quantity changed
    Update,
}

/// The row a front end should animate after a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeHint {
    pub uid: ItemUid,
    pub kind: ChangeKind,
}

impl ChangeHint {
    pub fn new(uid: ItemUid) -> Self {
        Self {
            uid,
            kind: ChangeKind::New,
        }
    }

    pub fn update(uid: ItemUid) -> Self {
        Self {
            uid,
            kind: ChangeKind::Update,
        }
    }
}
