//! Core module - configuration
//!
//! - [`Config`] - order desk configuration
//! - [`StoreMode`] - local or shared order storage

pub mod config;

pub use config::{Config, StoreMode};
