//! Logging Infrastructure
//!
//! tracing-subscriber fmt output, optionally into a daily rolling file.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger on stderr at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. File output is only used
/// when `log_dir` exists, so a missing directory falls back to stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "order-desk");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    // stdout belongs to the terminal UI
    subscriber.with_writer(std::io::stderr).init();
}
