//! Utilities - logging and time

pub mod logger;
pub mod time;

pub use logger::{init_logger, init_logger_with_file};
pub use time::now_millis;
