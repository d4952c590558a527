//! File-backed tracing setup.
//!
//! The terminal belongs to ratatui while the explorer runs, so every record
//! goes to a daily rolling JSON file. `log` macros used throughout the crate
//! are bridged into tracing via `LogTracer`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

use crate::config::AppConfig;

/// File name prefix for the rolling appender.
pub const LOG_FILE_PREFIX: &str = "pokedex-explorer.log";

/// Initialize logging for TUI mode.
///
/// Returns the appender guard; dropping it flushes and stops the writer,
/// so keep it alive for the lifetime of `main`.
pub fn init(config: &AppConfig) -> WorkerGuard {
    let log_dir = config.log_dir();

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {e}");
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter(&config.log.filter));

    let subscriber = tracing_subscriber::registry().with(file_layer);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {e}");
    }

    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {e}");
    }

    log::info!(
        "Logging initialized. Writing to: {} (daily rolling)",
        log_file_path(&log_dir).display()
    );

    guard
}

/// `RUST_LOG` wins over the configured directive; an invalid configured
/// directive degrades to `info`.
fn env_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Base path of the active log file (the appender adds a date suffix).
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_PREFIX)
}
