//! Menu catalog
//!
//! Static `{code, name}` lookup table. Loaded once at startup and read-only
//! afterwards; items are kept sorted by code.

use super::default_menu::DEFAULT_MENU;
use super::search::{self, SearchResult};
use shared::MenuItem;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Catalog load errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate menu code: {0}")]
    DuplicateCode(u32),

    #[error("Menu code must be greater than 0: {0}")]
    InvalidCode(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    by_code: HashMap<u32, usize>,
}

impl MenuCatalog {
    /// Build a catalog, rejecting code 0 and duplicate codes
    pub fn new(mut items: Vec<MenuItem>) -> CatalogResult<Self> {
        items.sort_by_key(|item| item.code);

        let mut by_code = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if item.code == 0 {
                return Err(CatalogError::InvalidCode(item.name.clone()));
            }
            if by_code.insert(item.code, idx).is_some() {
                return Err(CatalogError::DuplicateCode(item.code));
            }
        }

        Ok(Self { items, by_code })
    }

    /// The built-in restaurant menu
    pub fn default_menu() -> Self {
        // Codes in DEFAULT_MENU are unique (covered by tests)
        let mut items: Vec<MenuItem> = DEFAULT_MENU
            .iter()
            .map(|(code, name)| MenuItem::new(*code, *name))
            .collect();
        items.sort_by_key(|item| item.code);
        let by_code = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.code, idx))
            .collect();
        Self { items, by_code }
    }

    /// Load a catalog from a JSON array of `{code, name}` objects
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let items: Vec<MenuItem> = serde_json::from_slice(&bytes)?;
        let catalog = Self::new(items)?;
        tracing::info!(
            path = %path.as_ref().display(),
            items = catalog.len(),
            "Menu catalog loaded from file"
        );
        Ok(catalog)
    }

    pub fn lookup_by_code(&self, code: u32) -> Option<&MenuItem> {
        self.by_code.get(&code).map(|idx| &self.items[*idx])
    }

    /// Matching items, ascending by code
    pub fn search(&self, query: &str) -> Vec<MenuItem> {
        self.run_query(query).matches
    }

    /// Full search result including the auto-commit decision
    pub fn run_query(&self, query: &str) -> SearchResult {
        search::run(&self.items, query)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_menu_codes_are_unique() {
        let catalog = MenuCatalog::default_menu();
        assert_eq!(catalog.len(), DEFAULT_MENU.len());
        let rebuilt = MenuCatalog::new(catalog.items().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_lookup_by_code() {
        let catalog = MenuCatalog::default_menu();
        assert_eq!(
            catalog.lookup_by_code(203).map(|i| i.name.as_str()),
            Some("SPAGHETTI ALLA CARBONARA")
        );
        assert!(catalog.lookup_by_code(999).is_none());
    }

    #[test]
    fn test_items_sorted_by_code() {
        let catalog = MenuCatalog::default_menu();
        let codes: Vec<u32> = catalog.items().iter().map(|i| i.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_rejects_duplicate_and_zero_codes() {
        let dup = MenuCatalog::new(vec![MenuItem::new(5, "A"), MenuItem::new(5, "B")]);
        assert!(matches!(dup, Err(CatalogError::DuplicateCode(5))));

        let zero = MenuCatalog::new(vec![MenuItem::new(0, "ZERO")]);
        assert!(matches!(zero, Err(CatalogError::InvalidCode(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"code": 12, "name": "LAVANDA SPRITZ"}}, {{"code": 3, "name": "CAMPARI AMALFI"}}]"#
        )
        .unwrap();

        let catalog = MenuCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].code, 3);
    }
}
