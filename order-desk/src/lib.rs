//! Order Desk - order taking for waitstaff
//!
//! Pick a table, search the menu by code or name, and keep a running,
//! stacked order per table. Orders live in redb, either on the device
//! alone or in a shared document store that every client sees.
//!
//! # Module structure
//!
//! ```text
//! order-desk/src/
//! ├── core/          # configuration
//! ├── auth/          # shared PIN gate
//! ├── menu/          # catalog and search
//! ├── orders/        # order-state engine, storage, sync
//! ├── desk/          # UI controller and view/dialog traits
//! ├── terminal.rs    # line-based front end
//! └── utils/         # logging, time
//! ```

pub mod auth;
pub mod core;
pub mod desk;
pub mod menu;
pub mod orders;
pub mod terminal;
pub mod utils;

// Re-export public types
pub use auth::{PinPad, PinState};
pub use core::{Config, StoreMode};
pub use desk::{Dialogs, OrderDesk, OrderView};
pub use menu::{MenuCatalog, SearchResult};
pub use orders::{
    Backend, DocumentStore, LocalBackend, OrderBackend, OrderService, OrderStorage,
    Reconciliation, SearchOutcome, ServiceError,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and the configuration, create the working directory and
/// start logging
pub fn setup_environment() -> std::io::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  ___          _             ___         _
 / _ \ _ _ __| |___ _ _    |   \ ___ __| |__
| (_) | '_/ _` / -_) '_|   | |) / -_|_-< / /
 \___/|_| \__,_\___|_|     |___/\___/__/_\_\
    "#
    );
}
