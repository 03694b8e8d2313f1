//! UI seams
//!
//! The desk controller talks to the screen through [`OrderView`] and to the
//! user through [`Dialogs`]. Rendering, keyboards and animations live behind
//! these traits.

use async_trait::async_trait;
use shared::{ChangeHint, LineItem, TableId, TableSummary};

use crate::orders::SearchHit;

/// Receives everything the screen has to show
pub trait OrderView {
    /// Table cards, ascending by number
    fn render_tables(&mut self, tables: &[TableSummary]);

    /// The open table's order; `hint` names the row to animate
    fn render_order(&mut self, table_id: TableId, items: &[LineItem], hint: Option<&ChangeHint>);

    fn render_results(&mut self, hits: &[SearchHit]);

    fn clear_results(&mut self);

    /// Switch from the order screen to the table list
    fn show_table_list(&mut self);

    /// Non-blocking informational message
    fn notice(&mut self, message: &str);
}

/// Modal dialogs
///
/// `None` means the dialog was dismissed without an answer.
#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn confirm(&self, title: &str, message: &str) -> Option<bool>;

    async fn prompt(&self, title: &str, message: &str) -> Option<String>;

    async fn alert(&self, title: &str, message: &str);
}
