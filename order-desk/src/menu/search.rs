//! Menu search
//!
//! Maps the raw search box contents to menu matches:
//!
//! - all-digit queries match codes by prefix (leading zeros stripped)
//! - anything else matches names by case-insensitive substring
//! - matches are sorted ascending by code
//! - a single, unambiguous match is auto-committed

use shared::MenuItem;

/// Minimum query length (in characters) for a textual auto-commit
pub const MIN_TEXT_COMMIT_LEN: usize = 3;

/// How the query was interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// Empty input
    Empty,
    /// Digits only; holds the canonical prefix without leading zeros
    Numeric(String),
    /// Anything else; holds the case-folded query
    Textual(String),
}

impl QueryKind {
    pub fn classify(query: &str) -> Self {
        if query.is_empty() {
            return Self::Empty;
        }
        if query.chars().all(|c| c.is_ascii_digit()) {
            return Self::Numeric(query.trim_start_matches('0').to_string());
        }
        Self::Textual(query.to_lowercase())
    }
}

/// Outcome of one search keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub kind: QueryKind,
    /// Matches, ascending by code
    pub matches: Vec<MenuItem>,
    /// Set when the query fully identifies one item
    pub auto_commit: Option<MenuItem>,
}

impl SearchResult {
    fn empty(kind: QueryKind) -> Self {
        Self {
            kind,
            matches: Vec::new(),
            auto_commit: None,
        }
    }
}

/// Run a query against the full menu
pub fn run(menu: &[MenuItem], query: &str) -> SearchResult {
    let kind = QueryKind::classify(query);

    let mut matches: Vec<MenuItem> = match &kind {
        QueryKind::Empty => return SearchResult::empty(kind),
        // All zeros canonicalise to "", which matches nothing
        QueryKind::Numeric(prefix) if prefix.is_empty() => return SearchResult::empty(kind),
        QueryKind::Numeric(prefix) => menu
            .iter()
            .filter(|item| item.code_str().starts_with(prefix.as_str()))
            .cloned()
            .collect(),
        QueryKind::Textual(needle) => menu
            .iter()
            .filter(|item| item.name.to_lowercase().contains(needle.as_str()))
            .cloned()
            .collect(),
    };
    matches.sort_by_key(|item| item.code);

    let auto_commit = match matches.as_slice() {
        [only] if is_exact(&kind, only) => Some(only.clone()),
        _ => None,
    };

    SearchResult {
        kind,
        matches,
        auto_commit,
    }
}

/// Whether a lone match is what the user meant to type
fn is_exact(kind: &QueryKind, item: &MenuItem) -> bool {
    match kind {
        QueryKind::Empty => false,
        QueryKind::Numeric(prefix) => item.code_str() == *prefix,
        QueryKind::Textual(needle) => {
            needle.chars().count() >= MIN_TEXT_COMMIT_LEN
                && item.name.to_lowercase().starts_with(needle.as_str())
        }
    }
}
