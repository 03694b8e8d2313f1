//! Restack pass
//!
//! Re-establishes "one row per (code, comment)" after an edit that may have
//! produced duplicates. Later rows are folded into the first row with the same
//! pair; the first row keeps its position and uid.

use shared::LineItem;

/// Merge rows sharing (code, comment), summing quantities
pub fn restack(items: &[LineItem]) -> Vec<LineItem> {
    let mut stacked: Vec<LineItem> = Vec::with_capacity(items.len());

    for item in items {
        match stacked.iter_mut().find(|s| s.stacks_with(item)) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => stacked.push(item.clone()),
        }
    }

    stacked
}

/// Whether no two rows share (code, comment)
pub fn is_stacked(items: &[LineItem]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(idx, item)| !items[idx + 1..].iter().any(|other| other.stacks_with(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ItemUid;

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
    fn test_restack_merges_later_into_earlier() {
        let items = vec![
            line(100, 1, "no salt", "a"),
            line(200, 2, "", "b"),
            line(100, 2, "no salt", "c"),
            line(100, 1, "", "d"),
        ];

        let stacked = restack(&items);

        assert_eq!(stacked.len(), 3);
        assert_eq!(stacked[0].uid.as_str(), "a");
        assert_eq!(stacked[0].quantity, 3);
        assert_eq!(stacked[1].uid.as_str(), "b");
        assert_eq!(stacked[2].uid.as_str(), "d");
        assert!(is_stacked(&stacked));
    }

    #[test]
    fn test_restack_leaves_input_untouched() {
        let items = vec![line(1, 1, "", "a"), line(1, 1, "", "b")];
        let stacked = restack(&items);
        assert_eq!(items.len(), 2);
        assert_eq!(stacked.len(), 1);
        assert_eq!(stacked[0].quantity, 2);
    }

    #[test]
    fn test_comment_difference_keeps_rows_apart() {
        let items = vec![line(1, 1, "ice", "a"), line(1, 1, "Ice", "b")];
        assert_eq!(restack(&items), items);
        assert!(is_stacked(&items));
    }

    #[test]
    fn test_merged_quantity_saturates() {
        let items = vec![line(300, u32::MAX, "", "a"), line(300, 1, "", "b")];

        let stacked = restack(&items);

        assert_eq!(stacked.len(), 1);
        assert_eq!(stacked[0].uid.as_str(), "a");
        assert_eq!(stacked[0].quantity, u32::MAX);
    }

    #[test]
    fn test_empty_order() {
        assert!(restack(&[]).is_empty());
        assert!(is_stacked(&[]));
    }
}
