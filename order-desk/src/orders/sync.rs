//! Reconciliation of inbound shared-store snapshots
//!
//! Every snapshot replaces the local order book wholesale; optimistic local
//! state is simply overwritten (last write wins). What remains is deciding
//! what the UI should do about it.
//!
//! # Rules
//!
//! 1. No open table: refresh the table list only
//! 2. The open table vanished: leave it and tell the user
//! 3. Otherwise re-render the open table, highlighting the row this client
//!    touched last if that happened within the touch window. Rows changed by
//!    other clients are never highlighted.

use shared::{ChangeHint, OrderBook, TableId};

/// Default highlight window for the last local touch
pub const TOUCH_WINDOW_MS: i64 = 2_000;

/// The row this client touched last, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastTouch {
    pub hint: ChangeHint,
    /// Unix millis
    pub at: i64,
}

impl LastTouch {
    pub fn new(hint: ChangeHint, at: i64) -> Self {
        Self { hint, at }
    }

    pub fn is_recent(&self, now: i64, window_ms: i64) -> bool {
        now - self.at < window_ms
    }
}

/// Local state replaced by a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskState {
    pub book: OrderBook,
    pub active_table: Option<TableId>,
}

/// What the UI has to do after a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// No table open: refresh the table list
    TableList,
    /// The open table was deleted elsewhere
    ActiveTableRemoved(TableId),
    /// Re-render the open table
    Render {
        table_id: TableId,
        hint: Option<ChangeHint>,
    },
}

/// Fold a remote snapshot into local state
pub fn reconcile(
    local: &DeskState,
    remote: OrderBook,
    last_touch: Option<&LastTouch>,
    now: i64,
    window_ms: i64,
) -> (DeskState, Reconciliation) {
    let Some(active) = local.active_table else {
        return (
            DeskState {
                book: remote,
                active_table: None,
            },
            Reconciliation::TableList,
        );
    };

    if !remote.contains(active) {
        return (
            DeskState {
                book: remote,
                active_table: None,
            },
            Reconciliation::ActiveTableRemoved(active),
        );
    }

    let hint = last_touch
        .filter(|touch| touch.is_recent(now, window_ms))
        .map(|touch| touch.hint.clone());

    (
        DeskState {
            book: remote,
            active_table: Some(active),
        },
        Reconciliation::Render {
            table_id: active,
            hint,
        },
    )
}
