//! Order mutation appliers
//!
//! Each applier implements the `OrderApplier` trait and handles
//! one kind of mutation. Appliers are PURE functions over one order.

use enum_dispatch::enum_dispatch;

use super::traits::{Applied, OrderApplier};
use shared::Order;

mod comment_edited;
mod item_added;
mod item_removed;
mod quantity_changed;
mod table_cleared;

pub use comment_edited::CommentEditedApplier;
pub use item_added::ItemAddedApplier;
pub use item_removed::ItemRemovedApplier;
pub use quantity_changed::QuantityChangedApplier;
pub use table_cleared::TableClearedApplier;

/// OrderMutation enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(OrderApplier)]
#[derive(Debug, Clone)]
pub enum OrderMutation {
    ItemAdded(ItemAddedApplier),
    QuantityChanged(QuantityChangedApplier),
    ItemRemoved(ItemRemovedApplier),
    CommentEdited(CommentEditedApplier),
    TableCleared(TableClearedApplier),
}

impl OrderMutation {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            OrderMutation::ItemAdded(_) => "item_added",
            OrderMutation::QuantityChanged(_) => "quantity_changed",
            OrderMutation::ItemRemoved(_) => "item_removed",
            OrderMutation::CommentEdited(_) => "comment_edited",
            OrderMutation::TableCleared(_) => "table_cleared",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::restack::is_stacked;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared::MenuItem;

    const COMMENTS: &[&str] = &["", "no salt", "extra cheese", "no ice"];

    fn random_mutation(rng: &mut StdRng, order: &Order) -> OrderMutation {
        let pick_uid = |rng: &mut StdRng| {
            let idx = rng.gen_range(0..order.items.len());
            order.items[idx].uid.clone()
        };

        if order.is_empty() || rng.gen_bool(0.4) {
            let code = rng.gen_range(1..=4);
            return ItemAddedApplier {
                item: MenuItem::new(code, format!("Item {}", code)),
            }
            .into();
        }

        match rng.gen_range(0..3) {
            0 => CommentEditedApplier {
                uid: pick_uid(rng),
                comment: COMMENTS[rng.gen_range(0..COMMENTS.len())].to_string(),
            }
            .into(),
            1 => QuantityChangedApplier {
                uid: pick_uid(rng),
                delta: rng.gen_range(-2..=2),
            }
            .into(),
            _ => ItemRemovedApplier { uid: pick_uid(rng) }.into(),
        }
    }

    #[test]
    fn test_random_sequences_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let mut order = Order::default();
            for _ in 0..40 {
                let mutation = random_mutation(&mut rng, &order);
                let before_total: u32 = order.items.iter().map(|i| i.quantity).sum();
                let is_add = matches!(mutation, OrderMutation::ItemAdded(_));

                mutation.apply(&mut order);

                let after_total: u32 = order.items.iter().map(|i| i.quantity).sum();
                if is_add {
                    assert_eq!(after_total, before_total + 1);
                }
                assert!(order.items.iter().all(|i| i.quantity >= 1));
                assert!(
                    is_stacked(&order.items),
                    "duplicate (code, comment) after {}",
                    mutation.name()
                );
            }
        }
    }

    #[test]
    fn test_clear_empties_order() {
        let mut order = Order::default();
        let add: OrderMutation = ItemAddedApplier {
            item: MenuItem::new(1, "APEROL SPRITZ"),
        }
        .into();
        add.apply(&mut order);

        let applied = OrderMutation::from(TableClearedApplier).apply(&mut order);

        assert!(applied.changed);
        assert!(order.is_empty());
    }
}
