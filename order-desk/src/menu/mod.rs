//! Menu catalog and search

pub mod catalog;
pub mod default_menu;
pub mod search;

pub use catalog::{CatalogError, CatalogResult, MenuCatalog};
pub use search::{QueryKind, SearchResult};
