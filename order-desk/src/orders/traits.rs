//! Core traits for order mutations

use enum_dispatch::enum_dispatch;
use shared::{ChangeHint, Order};

/// Result of applying a mutation to one table's order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applied {
    /// Whether the order changed and must be persisted
    pub changed: bool,
    /// Row to animate, if any
    pub hint: Option<ChangeHint>,
}

impl Applied {
    /// Nothing happened (unknown uid etc.)
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// The order changed, no row to highlight
    pub fn changed() -> Self {
        Self {
            changed: true,
            hint: None,
        }
    }

    pub fn with_hint(hint: ChangeHint) -> Self {
        Self {
            changed: true,
            hint: Some(hint),
        }
    }
}

/// Applies one mutation to a table's order
///
/// Appliers are pure: they only touch the order they are given. Persistence
/// and rendering happen in the service afterwards.
#[enum_dispatch]
pub trait OrderApplier {
    fn apply(&self, order: &mut Order) -> Applied;
}
