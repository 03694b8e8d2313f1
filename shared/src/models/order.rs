//! Order Model
//!
//! A table's order is an ordered list of line items. The order book maps every
//! existing table to its order; a table with no items still has an entry.

use super::{ItemUid, LineItem, TableId, TableSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The running order of one table
///
/// Persisted as `{ "items": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, uid: &ItemUid) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.uid == uid)
    }

    pub fn find_mut(&mut self, uid: &ItemUid) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| &i.uid == uid)
    }

    pub fn position(&self, uid: &ItemUid) -> Option<usize> {
        self.items.iter().position(|i| &i.uid == uid)
    }

    /// Quantity of `code` sitting in the uncommented stack
    ///
    /// Commented splits are separate rows and do not count.
    pub fn uncommented_quantity(&self, code: u32) -> u32 {
        self.items
            .iter()
            .filter(|i| i.code == code && !i.has_comment())
            .map(|i| i.quantity)
            .sum()
    }

    /// Quantity of `code` across every row, commented or not
    pub fn total_quantity(&self, code: u32) -> u32 {
        self.items
            .iter()
            .filter(|i| i.code == code)
            .map(|i| i.quantity)
            .sum()
    }
}

/// All tables and their orders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderBook {
    tables: BTreeMap<TableId, Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, table: TableId) -> bool {
        self.tables.contains_key(&table)
    }

    pub fn order(&self, table: TableId) -> Option<&Order> {
        self.tables.get(&table)
    }

    pub fn order_mut(&mut self, table: TableId) -> Option<&mut Order> {
        self.tables.get_mut(&table)
    }

    /// Register a table with an empty order
    ///
    /// Returns `false` (and leaves the existing order alone) if the table exists.
    pub fn insert_table(&mut self, table: TableId) -> bool {
        if self.tables.contains_key(&table) {
            return false;
        }
        self.tables.insert(table, Order::default());
        true
    }

    /// Replace a table's order, creating the table if needed
    pub fn set_order(&mut self, table: TableId, order: Order) {
        self.tables.insert(table, order);
    }

    /// Remove a table together with its order
    pub fn remove_table(&mut self, table: TableId) -> Option<Order> {
        self.tables.remove(&table)
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Table numbers in ascending order
    pub fn tables(&self) -> impl Iterator<Item = TableId> + '_ {
        self.tables.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableId, &Order)> + '_ {
        self.tables.iter().map(|(id, order)| (*id, order))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table list cards, sorted ascending by table number
    pub fn summaries(&self) -> Vec<TableSummary> {
        self.tables
            .iter()
            .map(|(id, order)| TableSummary {
                table_id: *id,
                has_items: !order.is_empty(),
            })
            .collect()
    }
}

impl FromIterator<(TableId, Order)> for OrderBook {
    fn from_iter<I: IntoIterator<Item = (TableId, Order)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn table(n: u32) -> TableId {
        TableId::new(n).unwrap()
    }

    fn line(code: u32, quantity: u32, comment: &str, uid: &str) -> LineItem {
        LineItem {
            code,
            name: format!("Item {}", code),
            quantity,
            comment: comment.to_string(),
            uid: ItemUid::from(uid),
        }
    }

    #[test]
    fn test_uncommented_quantity_ignores_splits() {
        let order = Order::new(vec![
            line(100, 2, "", "a"),
            line(100, 1, "no salt", "b"),
            line(101, 4, "", "c"),
        ]);
        assert_eq!(order.uncommented_quantity(100), 2);
        assert_eq!(order.total_quantity(100), 3);
        assert_eq!(order.uncommented_quantity(999), 0);
    }

    #[test]
    fn test_summaries_are_sorted_and_flag_items() {
        let mut book = OrderBook::new();
        book.insert_table(table(12));
        book.insert_table(table(3));
        book.set_order(
            table(7),
            Order::new(vec![LineItem::from_menu(&MenuItem::new(1, "HUGO"))]),
        );

        let summaries = book.summaries();
        let ids: Vec<u32> = summaries.iter().map(|s| s.table_id.get()).collect();
        assert_eq!(ids, vec![3, 7, 12]);
        assert!(!summaries[0].has_items);
        assert!(summaries[1].has_items);
    }

    #[test]
    fn test_insert_table_keeps_existing_order() {
        let mut book = OrderBook::new();
        book.set_order(table(1), Order::new(vec![line(4, 1, "", "a")]));
        assert!(!book.insert_table(table(1)));
        assert_eq!(book.order(table(1)).unwrap().len(), 1);
    }

    #[test]
    fn test_persisted_shape() {
        let mut book = OrderBook::new();
        book.set_order(table(5), Order::new(vec![line(203, 1, "", "u-1")]));

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["5"]["items"][0]["code"], 203);
        assert_eq!(json["5"]["items"][0]["uid"], "u-1");

        let back: OrderBook = serde_json::from_value(json).unwrap();
        assert_eq!(back, book);
    }
}
