//! Logging Setup
//!
//! Installs the global `tracing` subscriber:
//! - a pretty stdout layer for humans,
//! - an optional JSON file layer on a daily rolling appender,
//! - a bridge so `log` macros end up in `tracing`.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::AppConfig;

const LOG_FILE_NAME: &str = "srd-lookup.log";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to create log directory {path}: {source}")]
    LogDir {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid log filter '{0}'")]
    Filter(String),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|_| LoggingError::Filter(default_level.to_string())),
    }
}

/// Initialize the logging system.
///
/// Returns the `WorkerGuard` of the file writer when file logging is enabled;
/// it must be kept alive so buffered logs are flushed on shutdown.
pub fn init(config: &AppConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .pretty()
        .with_filter(env_filter(&config.logging.level)?);

    let (file_layer, guard) = if config.logging.file_enabled {
        let log_dir = config.log_dir();
        ensure_dir(&log_dir)?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // JSON for machine ingestion
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(true)
            .with_filter(env_filter(&config.logging.level)?);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    // No-op when try_init already installed the bridge
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::trace!("LogTracer not installed: {}", e);
    }

    tracing::info!(
        file_enabled = config.logging.file_enabled,
        log_dir = %config.log_dir().display(),
        "Logging initialized"
    );

    Ok(guard)
}

fn ensure_dir(path: &Path) -> Result<(), LoggingError> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| LoggingError::LogDir {
        path: path.display().to_string(),
        source,
    })
}
