//! TableCleared applier

use crate::orders::traits::{Applied, OrderApplier};
use shared::Order;

/// Drop every row; the table itself stays
#[derive(Debug, Clone)]
pub struct TableClearedApplier;

impl OrderApplier for TableClearedApplier {
    fn apply(&self, order: &mut Order) -> Applied {
        order.items.clear();
        Applied::changed()
    }
}
