//! ItemAdded applier
//!
//! Adds one unit of a menu item to the order.

use crate::orders::traits::{Applied, OrderApplier};
use shared::{ChangeHint, LineItem, MenuItem, Order};

/// Add one unit by code
///
/// Only the uncommented row of the same code is a merge target; commented
/// splits are never stacked onto when adding.
#[derive(Debug, Clone)]
pub struct ItemAddedApplier {
    pub item: MenuItem,
}

impl OrderApplier for ItemAddedApplier {
    fn apply(&self, order: &mut Order) -> Applied {
        if let Some(existing) = order
            .items
            .iter_mut()
            .find(|i| i.code == self.item.code && !i.has_comment())
        {
            existing.quantity = existing.quantity.saturating_add(1);
            return Applied::with_hint(ChangeHint::update(existing.uid.clone()));
        }

        let line = LineItem::from_menu(&self.item);
        let hint = ChangeHint::new(line.uid.clone());
        order.items.push(line);
        Applied::with_hint(hint)
    }
}
