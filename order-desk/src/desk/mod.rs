//! Desk controller
//!
//! [`OrderDesk`] turns user actions into `OrderService` calls, awaits the
//! dialogs some of them need, and tells the view what to draw afterwards.
//! The service itself stays synchronous.

pub mod view;

pub use view::{Dialogs, OrderView};

use crate::orders::{OrderService, Reconciliation, SearchOutcome};
use crate::utils::time::now_millis;
use shared::{ChangeHint, ItemUid, OrderBook, TableId};

pub struct OrderDesk<V, D> {
    service: OrderService,
    view: V,
    dialogs: D,
}

impl<V: OrderView, D: Dialogs> OrderDesk<V, D> {
    pub fn new(service: OrderService, view: V, dialogs: D) -> Self {
        Self {
            service,
            view,
            dialogs,
        }
    }

    pub fn service(&self) -> &OrderService {
        &self.service
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// First screen: the resumed table, or the table list
    pub fn start(&mut self) {
        if self.service.resume_session().is_some() {
            self.render_active(None);
        } else {
            self.show_tables();
        }
    }

    /// Uid of the 1-based row on the open table
    pub fn uid_at(&self, row: usize) -> Option<ItemUid> {
        let order = self.service.active_order()?;
        order.items.get(row.checked_sub(1)?).map(|item| item.uid.clone())
    }

    // ========== Navigation ==========

    pub fn select_table(&mut self, table_id: TableId) {
        if self.service.select_table(table_id) {
            self.view.clear_results();
            self.render_active(None);
        } else {
            self.view.notice(&format!("Table {} does not exist", table_id));
        }
    }

    pub fn back_to_tables(&mut self) {
        self.service.back_to_tables();
        self.view.clear_results();
        self.show_tables();
    }

    // ========== Search ==========

    /// Called on every change of the search box
    pub fn type_query(&mut self, query: &str) {
        match self.service.search(query) {
            SearchOutcome::Cleared => self.view.clear_results(),
            SearchOutcome::Matches(hits) => self.view.render_results(&hits),
            SearchOutcome::Committed(hint) => {
                self.view.clear_results();
                self.render_active(hint);
            }
        }
    }

    /// A result was tapped
    pub fn pick_result(&mut self, code: u32) {
        let hint = self.service.add_by_code(code);
        self.view.clear_results();
        self.render_active(hint);
    }

    // ========== Rows ==========

    pub fn increment(&mut self, uid: &ItemUid) {
        let hint = self.service.change_quantity(uid, 1);
        self.render_active(hint);
    }

    pub fn decrement(&mut self, uid: &ItemUid) {
        let hint = self.service.change_quantity(uid, -1);
        self.render_active(hint);
    }

    pub fn remove_item(&mut self, uid: &ItemUid) {
        self.service.remove_item(uid);
        self.render_active(None);
    }

    /// Ask for a comment and apply it; a dismissed prompt changes nothing
    pub async fn edit_comment(&mut self, uid: &ItemUid) {
        let Some(item) = self.service.find_item(uid) else {
            return;
        };
        let message = format!("Comment for {}:", item.name);

        let Some(comment) = self.dialogs.prompt("Comment", &message).await else {
            return;
        };
        self.service.edit_comment(uid, comment);
        self.render_active(None);
    }

    pub async fn clear_table(&mut self) {
        if self.service.active_table().is_none() {
            return;
        }
        if self
            .dialogs
            .confirm("Clear table", "Delete all items of this order?")
            .await
            == Some(true)
        {
            self.service.clear_table();
            self.render_active(None);
        }
    }

    // ========== Tables ==========

    /// Prompt for a number and open the new table
    ///
    /// Invalid input is reported with an alert and changes nothing.
    pub async fn create_table(&mut self) -> Option<TableId> {
        let input = self.dialogs.prompt("New table", "Table number:").await?;

        match self.service.create_table(&input) {
            Ok(table_id) => {
                self.view.clear_results();
                self.render_active(None);
                Some(table_id)
            }
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "Table number rejected");
                self.dialogs.alert("Error", &e.to_string()).await;
                None
            }
        }
    }

    pub async fn delete_table(&mut self, table_id: TableId) {
        let message = format!("Delete table {}?", table_id);
        if self.dialogs.confirm("Delete table", &message).await != Some(true) {
            return;
        }
        if self.service.delete_table(table_id) {
            self.view.clear_results();
            self.show_tables();
        }
    }

    pub async fn delete_all(&mut self) {
        let confirmed = self
            .dialogs
            .confirm(
                "Delete all",
                "Really delete ALL tables and orders? This cannot be undone.",
            )
            .await;
        if confirmed == Some(true) {
            self.service.delete_all();
            self.view.clear_results();
            self.show_tables();
        }
    }

    // ========== Remote Updates ==========

    /// Fold in a snapshot from the shared store
    pub fn on_remote_snapshot(&mut self, snapshot: OrderBook) {
        match self.service.apply_remote(snapshot, now_millis()) {
            Reconciliation::TableList => {
                self.view.render_tables(&self.service.tables());
            }
            Reconciliation::ActiveTableRemoved(table_id) => {
                self.view.clear_results();
                self.show_tables();
                self.view
                    .notice(&format!("Table {} was deleted on another device", table_id));
            }
            Reconciliation::Render { hint, .. } => self.render_active(hint),
        }
    }

    fn show_tables(&mut self) {
        self.view.show_table_list();
        self.view.render_tables(&self.service.tables());
    }

    fn render_active(&mut self, hint: Option<ChangeHint>) {
        let Some(table_id) = self.service.active_table() else {
            return;
        };
        if let Some(order) = self.service.active_order() {
            self.view.render_order(table_id, &order.items, hint.as_ref());
        }
    }
}
