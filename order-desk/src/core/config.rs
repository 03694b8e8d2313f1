use crate::auth::{DEFAULT_PIN, PIN_LENGTH};
use std::path::PathBuf;
use std::str::FromStr;

/// Where orders live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// This device's own redb file, no change notifications
    #[default]
    Local,
    /// Shared document store broadcasting every change
    Shared,
}

impl FromStr for StoreMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "shared" => Ok(Self::Shared),
            other => Err(format!("unknown store mode: {}", other)),
        }
    }
}

/// Order desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory for the database |
/// | DB_FILE | orders.redb | Database file name inside WORK_DIR |
/// | STORE_MODE | local | `local` or `shared` |
/// | MENU_FILE | (built-in menu) | JSON menu `[{code, name}]` |
/// | WAITER_PIN | 0000 | Shared 4-digit PIN |
/// | LOG_LEVEL | info | Log level (RUST_LOG wins if set) |
/// | LOG_DIR | (stderr) | Directory for daily rolling log files |
/// | TOUCH_WINDOW_MS | 2000 | Highlight window for the last local touch |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/desk STORE_MODE=shared cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub db_file: String,
    pub store_mode: StoreMode,
    pub menu_file: Option<String>,
    pub waiter_pin: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub touch_window_ms: i64,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            work_dir: lookup("WORK_DIR").unwrap_or_else(|| "./data".into()),
            db_file: lookup("DB_FILE").unwrap_or_else(|| "orders.redb".into()),
            store_mode: lookup("STORE_MODE")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            menu_file: lookup("MENU_FILE").filter(|v| !v.is_empty()),
            waiter_pin: lookup("WAITER_PIN")
                .and_then(|pin| validate_pin(&pin))
                .unwrap_or_else(|| DEFAULT_PIN.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|v| !v.is_empty()),
            touch_window_ms: lookup("TOUCH_WINDOW_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::orders::TOUCH_WINDOW_MS),
        }
    }

    /// Override the parts that tests care about
    pub fn with_overrides(work_dir: impl Into<String>, store_mode: StoreMode) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.store_mode = store_mode;
        config
    }

    /// Full path of the redb file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    pub fn is_shared(&self) -> bool {
        self.store_mode == StoreMode::Shared
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn validate_pin(pin: &str) -> Option<String> {
    let pin = pin.trim();
    if pin.len() == PIN_LENGTH && pin.chars().all(|c| c.is_ascii_digit()) {
        Some(pin.to_string())
    } else {
        None
    }
}
