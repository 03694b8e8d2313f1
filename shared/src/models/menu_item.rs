//! Menu Item Model

use serde::{Deserialize, Serialize};

/// A dish or drink on the menu (菜品)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    /// Short numeric code typed on the numpad
    pub code: u32,
    pub name: String,
}

impl MenuItem {
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Code as it is typed, without leading zeros
    pub fn code_str(&self) -> String {
        self.code.to_string()
    }
}
