//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for rubot.

use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{RubotError, Result};

/// Initialize logging based on configuration
///
/// When a log file is configured the returned guard flushes the background
/// writer on drop, so the caller must keep it alive for the process lifetime.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| RubotError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match config.file_path.as_deref().filter(|p| !p.is_empty()) {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path.file_name().map(|n| n.to_owned()).unwrap_or_else(|| "rubot.log".into());

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| RubotError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of an admin roster refresh
pub fn log_roster_refresh(chat_id: i64, admin_count: usize, forced: bool) {
    debug!(
        chat_id = chat_id,
        admin_count = admin_count,
        forced = forced,
        "Admin roster refreshed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: u64, chat_id: i64, action: &str, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        chat_id = chat_id,
        action = action,
        details = details,
        "Admin action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
