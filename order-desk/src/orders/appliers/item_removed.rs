//! ItemRemoved applier

use crate::orders::traits::{Applied, OrderApplier};
use shared::{ItemUid, Order};

/// Remove a row regardless of its quantity
#[derive(Debug, Clone)]
pub struct ItemRemovedApplier {
    pub uid: ItemUid,
}

impl OrderApplier for ItemRemovedApplier {
    fn apply(&self, order: &mut Order) -> Applied {
        match order.position(&self.uid) {
            Some(idx) => {
                order.items.remove(idx);
                Applied::changed()
            }
            None => Applied::unchanged(),
        }
    }
}
