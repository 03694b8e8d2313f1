//! OrderService - the order-state engine of one client
//!
//! Owns the order book, the active table and the last local touch. Every
//! mutation runs synchronously against the in-memory book, then is written
//! through to the backend.
//!
//! # Mutation Flow
//!
//! ```text
//! add_by_code / change_quantity / edit_comment / ...
//!     ├─ 1. Require an active table (no-op otherwise)
//!     ├─ 2. Apply the OrderMutation to that table's order
//!     ├─ 3. Skip the rest if nothing changed (unknown uid)
//!     ├─ 4. Record the last touch (uid + time) for highlighting
//!     ├─ 5. Write through to the backend (errors logged, no rollback)
//!     └─ 6. Return the change hint for rendering
//! ```

mod error;
pub use error::*;

use super::appliers::{
    CommentEditedApplier, ItemAddedApplier, ItemRemovedApplier, OrderMutation,
    QuantityChangedApplier, TableClearedApplier,
};
use super::backend::{Backend, OrderBackend};
use super::session::SessionStore;
use super::sync::{self, DeskState, LastTouch, Reconciliation, TOUCH_WINDOW_MS};
use super::traits::OrderApplier;
use crate::menu::{MenuCatalog, QueryKind};
use crate::utils::time::now_millis;
use shared::{
    ChangeHint, ItemUid, LineItem, MenuItem, Order, OrderBook, TableId, TableSummary,
    ValidationError,
};
use std::sync::Arc;

/// One presented search match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub item: MenuItem,
    /// Quantity of this code already on the active table, uncommented rows only
    pub in_order: u32,
}

/// What a search keystroke did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query: hide the results
    Cleared,
    /// Matches to present (may be empty)
    Matches(Vec<SearchHit>),
    /// The query identified one item and it was added
    Committed(Option<ChangeHint>),
}

/// OrderService for one client
pub struct OrderService {
    catalog: Arc<MenuCatalog>,
    book: OrderBook,
    active_table: Option<TableId>,
    last_touch: Option<LastTouch>,
    backend: Backend,
    session: Arc<dyn SessionStore>,
    touch_window_ms: i64,
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService")
            .field("tables", &self.book.len())
            .field("active_table", &self.active_table)
            .field("backend", &if self.backend.is_shared() { "shared" } else { "local" })
            .field("session", &"<SessionStore>")
            .finish()
    }
}

impl OrderService {
    /// Build the service, loading the order book from the backend
    pub fn open(
        catalog: Arc<MenuCatalog>,
        backend: Backend,
        session: Arc<dyn SessionStore>,
    ) -> ServiceResult<Self> {
        let book = backend.load_all()?;
        tracing::info!(
            tables = book.len(),
            menu_items = catalog.len(),
            shared = backend.is_shared(),
            "Order service opened"
        );
        Ok(Self {
            catalog,
            book,
            active_table: None,
            last_touch: None,
            backend,
            session,
            touch_window_ms: TOUCH_WINDOW_MS,
        })
    }

    /// Override the highlight window (default 2 s)
    pub fn with_touch_window(mut self, window_ms: i64) -> Self {
        self.touch_window_ms = window_ms;
        self
    }

    /// Re-open the table remembered by the session marker
    ///
    /// A marker naming a table that no longer exists is cleared.
    pub fn resume_session(&mut self) -> Option<TableId> {
        let marker = match self.session.get_active_table() {
            Ok(marker) => marker?,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read session marker");
                return None;
            }
        };

        if self.book.contains(marker) {
            tracing::info!(table = %marker, "Resuming session");
            self.active_table = Some(marker);
            Some(marker)
        } else {
            tracing::info!(table = %marker, "Session marker names a missing table, clearing");
            self.clear_session_marker();
            None
        }
    }

    // ========== Queries ==========

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Table list cards, ascending by table number
    pub fn tables(&self) -> Vec<TableSummary> {
        self.book.summaries()
    }

    pub fn active_table(&self) -> Option<TableId> {
        self.active_table
    }

    pub fn active_order(&self) -> Option<&Order> {
        self.active_table.and_then(|id| self.book.order(id))
    }

    /// Line item on the active table by uid
    pub fn find_item(&self, uid: &ItemUid) -> Option<&LineItem> {
        self.active_order().and_then(|order| order.find(uid))
    }

    pub fn last_touch(&self) -> Option<&LastTouch> {
        self.last_touch.as_ref()
    }

    pub fn is_shared(&self) -> bool {
        self.backend.is_shared()
    }

    // ========== Tables ==========

    /// Make a table active and remember it in the session marker
    ///
    /// Returns `false` for an unknown table.
    pub fn select_table(&mut self, table_id: TableId) -> bool {
        if !self.book.contains(table_id) {
            tracing::warn!(table = %table_id, "Cannot select unknown table");
            return false;
        }
        self.active_table = Some(table_id);
        if let Err(e) = self.session.set_active_table(table_id) {
            tracing::error!(table = %table_id, error = %e, "Failed to store session marker");
        }
        tracing::debug!(table = %table_id, "Table selected");
        true
    }

    /// Leave the active table
    pub fn back_to_tables(&mut self) {
        self.active_table = None;
        self.clear_session_marker();
    }

    /// Validate raw input and register a new empty table
    ///
    /// The new table becomes active.
    pub fn create_table(&mut self, input: &str) -> Result<TableId, ValidationError> {
        let table_id = TableId::parse_input(input)?;
        if !self.book.insert_table(table_id) {
            return Err(ValidationError::TableExists(table_id));
        }

        if let Err(e) = self.backend.save_order(table_id, &Order::default()) {
            tracing::error!(table = %table_id, error = %e, "Failed to persist new table");
        }
        tracing::info!(table = %table_id, "Table created");

        self.select_table(table_id);
        Ok(table_id)
    }

    /// Remove a table and its order
    ///
    /// Deleting the active table returns to the table list.
    pub fn delete_table(&mut self, table_id: TableId) -> bool {
        if self.book.remove_table(table_id).is_none() {
            return false;
        }

        if let Err(e) = self.backend.delete_table(table_id) {
            tracing::error!(table = %table_id, error = %e, "Failed to delete table");
        }
        tracing::info!(table = %table_id, "Table deleted");

        if self.active_table == Some(table_id) {
            self.back_to_tables();
        }
        true
    }

    /// Remove every table and return to the table list
    pub fn delete_all(&mut self) {
        let count = self.book.len();
        self.book.clear();
        if let Err(e) = self.backend.delete_all() {
            tracing::error!(error = %e, "Failed to delete all tables");
        }
        self.back_to_tables();
        self.last_touch = None;
        tracing::info!(count, "All tables deleted");
    }

    // ========== Search ==========

    /// Run one search keystroke
    ///
    /// A single unambiguous match is added straight to the active table.
    /// Without an active table matches are listed but never committed.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        let result = self.catalog.run_query(query);
        if result.kind == QueryKind::Empty {
            return SearchOutcome::Cleared;
        }

        if let Some(item) = result.auto_commit
            && self.active_table.is_some()
        {
            tracing::debug!(code = item.code, query, "Search auto-commit");
            return SearchOutcome::Committed(self.add_item(item));
        }

        let hits = result
            .matches
            .into_iter()
            .map(|item| SearchHit {
                in_order: self
                    .active_order()
                    .map(|order| order.uncommented_quantity(item.code))
                    .unwrap_or(0),
                item,
            })
            .collect();
        SearchOutcome::Matches(hits)
    }

    // ========== Mutations ==========

    /// Add a menu item by code (picked from the results list)
    ///
    /// Unknown codes are ignored.
    pub fn add_by_code(&mut self, code: u32) -> Option<ChangeHint> {
        let item = self.catalog.lookup_by_code(code)?.clone();
        self.add_item(item)
    }

    pub fn add_item(&mut self, item: MenuItem) -> Option<ChangeHint> {
        self.mutate(ItemAddedApplier { item }.into())
    }

    /// Add a signed delta; a result of zero or less removes the row
    pub fn change_quantity(&mut self, uid: &ItemUid, delta: i32) -> Option<ChangeHint> {
        self.mutate(
            QuantityChangedApplier {
                uid: uid.clone(),
                delta,
            }
            .into(),
        )
    }

    pub fn remove_item(&mut self, uid: &ItemUid) {
        self.mutate(ItemRemovedApplier { uid: uid.clone() }.into());
    }

    /// Set a row's comment, splitting one unit off a stack
    pub fn edit_comment(&mut self, uid: &ItemUid, comment: impl Into<String>) {
        self.mutate(
            CommentEditedApplier {
                uid: uid.clone(),
                comment: comment.into(),
            }
            .into(),
        );
    }

    /// Empty the active table's order (the table stays)
    pub fn clear_table(&mut self) {
        self.mutate(TableClearedApplier.into());
    }

    fn mutate(&mut self, mutation: OrderMutation) -> Option<ChangeHint> {
        let table_id = self.active_table?;
        let Some(order) = self.book.order_mut(table_id) else {
            tracing::warn!(
                table = %table_id,
                mutation = mutation.name(),
                "Active table has no order"
            );
            return None;
        };

        let applied = mutation.apply(order);
        if !applied.changed {
            tracing::debug!(
                table = %table_id,
                mutation = mutation.name(),
                "Mutation had no effect"
            );
            return None;
        }

        if let Some(hint) = &applied.hint {
            self.last_touch = Some(LastTouch::new(hint.clone(), now_millis()));
        }

        if let Err(e) = self.backend.save_order(table_id, order) {
            tracing::error!(
                table = %table_id,
                mutation = mutation.name(),
                error = %e,
                "Failed to persist order"
            );
        }

        applied.hint
    }

    // ========== Remote Updates ==========

    /// Replace local state with an inbound snapshot
    pub fn apply_remote(&mut self, snapshot: OrderBook, now: i64) -> Reconciliation {
        let local = DeskState {
            book: std::mem::take(&mut self.book),
            active_table: self.active_table,
        };
        let (state, outcome) = sync::reconcile(
            &local,
            snapshot,
            self.last_touch.as_ref(),
            now,
            self.touch_window_ms,
        );

        self.book = state.book;
        self.active_table = state.active_table;
        if let Reconciliation::ActiveTableRemoved(table_id) = outcome {
            tracing::info!(table = %table_id, "Active table removed by another client");
            self.clear_session_marker();
        }
        outcome
    }

    fn clear_session_marker(&self) {
        if let Err(e) = self.session.clear_active_table() {
            tracing::error!(error = %e, "Failed to clear session marker");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::backend::LocalBackend;
    use crate::orders::storage::{OrderStorage, StorageError};
    use shared::ChangeKind;

    fn table(n: u32) -> TableId {
        TableId::new(n).unwrap()
    }

    fn create_test_service() -> (OrderService, OrderStorage) {
        let storage = OrderStorage::open_in_memory().unwrap();
        let service = OrderService::open(
            Arc::new(MenuCatalog::default_menu()),
            Backend::from(LocalBackend::new(storage.clone())),
            Arc::new(storage.clone()),
        )
        .unwrap();
        (service, storage)
    }

    fn service_with_table(n: u32) -> (OrderService, OrderStorage) {
        let (mut service, storage) = create_test_service();
        service.create_table(&n.to_string()).unwrap();
        (service, storage)
    }

    fn items(service: &OrderService) -> Vec<LineItem> {
        service.active_order().unwrap().items.clone()
    }

    #[test]
    fn test_open_fails_on_corrupt_order() {
        let storage = OrderStorage::open_in_memory().unwrap();
        storage.store_raw(3, b"not json").unwrap();

        let result = OrderService::open(
            Arc::new(MenuCatalog::default_menu()),
            Backend::from(LocalBackend::new(storage.clone())),
            Arc::new(storage),
        );

        assert!(matches!(
            result,
            Err(ServiceError::Storage(StorageError::Serialization(_)))
        ));
    }

    #[test]
    fn test_create_table_validation() {
        let (mut service, _) = create_test_service();

        assert_eq!(service.create_table(""), Err(ValidationError::MissingTableNumber));
        assert_eq!(
            service.create_table("abc"),
            Err(ValidationError::InvalidTableNumber("abc".to_string()))
        );
        assert_eq!(service.create_table("0"), Err(ValidationError::NonPositiveTableNumber));
        assert_eq!(service.create_table("-3"), Err(ValidationError::NonPositiveTableNumber));
        assert!(service.tables().is_empty());

        assert_eq!(service.create_table("12"), Ok(table(12)));
        assert_eq!(service.create_table("12"), Err(ValidationError::TableExists(table(12))));
        assert_eq!(service.tables().len(), 1);
    }

    #[test]
    fn test_create_table_persists_and_selects() {
        let (service, storage) = service_with_table(5);

        assert_eq!(service.active_table(), Some(table(5)));
        assert_eq!(storage.get_order(table(5)).unwrap(), Some(Order::default()));
        assert_eq!(storage.get_active_table().unwrap(), Some(table(5)));
    }

    #[test]
    fn test_table_list_sorted_with_item_flags() {
        let (mut service, _) = create_test_service();
        for n in ["7", "2", "10"] {
            service.create_table(n).unwrap();
        }
        service.select_table(table(2));
        service.add_by_code(300);

        let summaries = service.tables();
        let ids: Vec<u32> = summaries.iter().map(|s| s.table_id.get()).collect();
        assert_eq!(ids, vec![2, 7, 10]);
        assert!(summaries[0].has_items);
        assert!(!summaries[1].has_items);
    }

    #[test]
    fn test_two_rapid_adds_stack() {
        let (mut service, storage) = service_with_table(1);

        let first = service.add_by_code(300).unwrap();
        let second = service.add_by_code(300).unwrap();

        assert_eq!(first.kind, ChangeKind::New);
        assert_eq!(second, ChangeHint::update(first.uid.clone()));

        let items = items(&service);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert!(items[0].comment.is_empty());
        assert_eq!(storage.get_order(table(1)).unwrap().unwrap().items, items);
    }

    #[test]
    fn test_mutations_without_active_table_are_noops() {
        let (mut service, storage) = service_with_table(1);
        service.back_to_tables();

        assert!(service.add_by_code(300).is_none());
        service.clear_table();

        assert!(service.book().order(table(1)).unwrap().is_empty());
        assert!(storage.get_order(table(1)).unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_code_and_uid_are_ignored() {
        let (mut service, _) = service_with_table(1);

        assert!(service.add_by_code(9999).is_none());
        assert!(service.change_quantity(&ItemUid::from("missing"), 1).is_none());
        service.remove_item(&ItemUid::from("missing"));

        assert!(items(&service).is_empty());
        assert!(service.last_touch().is_none());
    }

    #[test]
    fn test_decrement_to_zero_removes() {
        let (mut service, _) = service_with_table(1);
        let hint = service.add_by_code(62).unwrap();

        assert!(service.change_quantity(&hint.uid, -1).is_none());
        assert!(service.find_item(&hint.uid).is_none());
    }

    #[test]
    fn test_comment_split_and_restack() {
        let (mut service, _) = service_with_table(1);
        let uid = service.add_by_code(300).unwrap().uid;
        service.add_by_code(300);
        service.add_by_code(300);

        service.edit_comment(&uid, "no basil");
        let rows = items(&service);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].quantity, rows[0].comment.as_str()), (2, ""));
        assert_eq!((rows[1].quantity, rows[1].comment.as_str()), (1, "no basil"));
        assert_ne!(rows[1].uid, uid);

        // Second split with the same comment stacks onto the first
        service.edit_comment(&uid, "no basil");
        let rows = items(&service);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].quantity, 1);
        assert_eq!(rows[1].quantity, 2);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let (mut service, _) = service_with_table(1);
        let uid = service.add_by_code(300).unwrap().uid;
        service.change_quantity(&uid, i32::MAX);
        service.change_quantity(&uid, i32::MAX);
        assert_eq!(service.find_item(&uid).unwrap().quantity, u32::MAX);

        service.add_by_code(300);
        assert_eq!(service.find_item(&uid).unwrap().quantity, u32::MAX);

        // split one off, then clear its comment so restack folds it back
        service.edit_comment(&uid, "no basil");
        let split = items(&service)[1].uid.clone();
        service.change_quantity(&uid, 1);
        service.edit_comment(&split, "");

        let rows = items(&service);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, u32::MAX);
    }

    #[test]
    fn test_search_auto_commit_and_hits() {
        let (mut service, _) = service_with_table(1);

        let SearchOutcome::Committed(Some(hint)) = service.search("203") else {
            panic!("expected auto-commit");
        };
        assert_eq!(service.find_item(&hint.uid).unwrap().code, 203);

        let SearchOutcome::Matches(hits) = service.search("20") else {
            panic!("expected matches");
        };
        let hit = hits.iter().find(|h| h.item.code == 203).unwrap();
        assert_eq!(hit.in_order, 1);
        assert_eq!(items(&service).len(), 1);

        assert_eq!(service.search(""), SearchOutcome::Cleared);
    }

    #[test]
    fn test_search_hint_ignores_commented_rows() {
        let (mut service, _) = service_with_table(1);
        let uid = service.add_by_code(203).unwrap().uid;
        service.add_by_code(203);
        service.edit_comment(&uid, "well done");

        let SearchOutcome::Matches(hits) = service.search("20") else {
            panic!("expected matches");
        };
        let hit = hits.iter().find(|h| h.item.code == 203).unwrap();
        assert_eq!(hit.in_order, 1);
    }

    #[test]
    fn test_search_without_table_never_commits() {
        let (mut service, _) = create_test_service();

        let SearchOutcome::Matches(hits) = service.search("203") else {
            panic!("expected matches");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].in_order, 0);
    }

    #[test]
    fn test_delete_active_table_clears_session() {
        let (mut service, storage) = service_with_table(4);
        assert_eq!(storage.get_active_table().unwrap(), Some(table(4)));

        assert!(service.delete_table(table(4)));

        assert!(service.active_table().is_none());
        assert!(storage.get_active_table().unwrap().is_none());
        assert!(storage.get_order(table(4)).unwrap().is_none());
        assert!(!service.delete_table(table(4)));
    }

    #[test]
    fn test_delete_all() {
        let (mut service, storage) = service_with_table(1);
        service.create_table("2").unwrap();

        service.delete_all();

        assert!(service.tables().is_empty());
        assert!(service.active_table().is_none());
        assert!(storage.load_all().unwrap().is_empty());
        assert!(storage.get_active_table().unwrap().is_none());
    }

    #[test]
    fn test_resume_session() {
        let storage = OrderStorage::open_in_memory().unwrap();
        storage.store_order(table(3), &Order::default()).unwrap();
        storage.set_active_table(table(3)).unwrap();

        let mut service = OrderService::open(
            Arc::new(MenuCatalog::default_menu()),
            Backend::from(LocalBackend::new(storage.clone())),
            Arc::new(storage.clone()),
        )
        .unwrap();

        assert_eq!(service.resume_session(), Some(table(3)));
        assert_eq!(service.active_table(), Some(table(3)));
    }

    #[test]
    fn test_resume_stale_session_clears_marker() {
        let (mut service, storage) = create_test_service();
        storage.set_active_table(table(8)).unwrap();

        assert!(service.resume_session().is_none());
        assert!(storage.get_active_table().unwrap().is_none());
    }

    #[test]
    fn test_apply_remote_passes_recent_touch() {
        let (mut service, _) = service_with_table(1);
        let hint = service.add_by_code(300).unwrap();
        let touched_at = service.last_touch().unwrap().at;
        let snapshot = service.book().clone();

        let outcome = service.apply_remote(snapshot.clone(), touched_at + 500);
        assert_eq!(
            outcome,
            Reconciliation::Render {
                table_id: table(1),
                hint: Some(hint),
            }
        );

        let outcome = service.apply_remote(snapshot, touched_at + 5_000);
        assert_eq!(
            outcome,
            Reconciliation::Render {
                table_id: table(1),
                hint: None,
            }
        );
    }

    #[test]
    fn test_apply_remote_active_table_removed() {
        let (mut service, storage) = service_with_table(1);

        let outcome = service.apply_remote(OrderBook::new(), now_millis());

        assert_eq!(outcome, Reconciliation::ActiveTableRemoved(table(1)));
        assert!(service.active_table().is_none());
        assert!(storage.get_active_table().unwrap().is_none());
    }
}
