//! QuantityChanged applier
//!
//! Adds a signed delta to one row. A result of zero or below removes the row,
//! exactly like an explicit removal.

use super::item_removed::ItemRemovedApplier;
use crate::orders::traits::{Applied, OrderApplier};
use shared::{ChangeHint, ItemUid, Order};

#[derive(Debug, Clone)]
pub struct QuantityChangedApplier {
    pub uid: ItemUid,
    pub delta: i32,
}

impl OrderApplier for QuantityChangedApplier {
    fn apply(&self, order: &mut Order) -> Applied {
        let Some(item) = order.find_mut(&self.uid) else {
            return Applied::unchanged();
        };

        let next = i64::from(item.quantity) + i64::from(self.delta);
        if next <= 0 {
            return ItemRemovedApplier {
                uid: self.uid.clone(),
            }
            .apply(order);
        }

        // saturate rather than wrap
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Applied::with_hint(ChangeHint::update(self.uid.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ChangeKind, LineItem};

    fn order_with(quantity: u32) -> Order {
        Order::new(vec![LineItem {
            code: 62,
            name: "COCA COLA 0,2l".to_string(),
            quantity,
            comment: String::new(),
            uid: ItemUid::from("a"),
        }])
    }

    fn change(order: &mut Order, delta: i32) -> Applied {
        QuantityChangedApplier {
            uid: ItemUid::from("a"),
            delta,
        }
        .apply(order)
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut order = order_with(2);

        let applied = change(&mut order, 1);
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(applied.hint.unwrap().kind, ChangeKind::Update);

        change(&mut order, -1);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn test_decrement_to_zero_removes() {
        let mut order = order_with(1);
        let applied = change(&mut order, -1);

        assert!(applied.changed);
        assert!(applied.hint.is_none());
        assert!(order.find(&ItemUid::from("a")).is_none());
    }

    #[test]
    fn test_large_negative_delta_removes_like_explicit_removal() {
        let mut by_delta = order_with(2);
        change(&mut by_delta, -5);

        let mut by_removal = order_with(2);
        ItemRemovedApplier {
            uid: ItemUid::from("a"),
        }
        .apply(&mut by_removal);

        assert_eq!(by_delta, by_removal);
    }

    #[test]
    fn test_unknown_uid_is_noop() {
        let mut order = order_with(2);
        let applied = QuantityChangedApplier {
            uid: ItemUid::from("gone"),
            delta: -1,
        }
        .apply(&mut order);

        assert_eq!(applied, Applied::unchanged());
        assert_eq!(order.items[0].quantity, 2);
    }
}
