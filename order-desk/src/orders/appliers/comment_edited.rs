//! CommentEdited applier
//!
//! A single unit takes the comment in place. From a stack of several units,
//! one unit is peeled off into a new row carrying the comment. Either way the
//! order is restacked afterwards so that equal (code, comment) rows fold back
//! together.

use crate::orders::restack::restack;
use crate::orders::traits::{Applied, OrderApplier};
use shared::{ItemUid, LineItem, Order};

#[derive(Debug, Clone)]
pub struct CommentEditedApplier {
    pub uid: ItemUid,
    /// New comment, may be empty
    pub comment: String,
}

impl OrderApplier for CommentEditedApplier {
    fn apply(&self, order: &mut Order) -> Applied {
        let Some(item) = order.find_mut(&self.uid) else {
            return Applied::unchanged();
        };

        if item.quantity > 1 {
            item.quantity -= 1;
            let split = LineItem {
                code: item.code,
                name: item.name.clone(),
                quantity: 1,
                comment: self.comment.clone(),
                uid: ItemUid::new(),
            };
            order.items.push(split);
        } else {
            item.comment = self.comment.clone();
        }

        order.items = restack(&order.items);
        Applied::changed()
    }
}
