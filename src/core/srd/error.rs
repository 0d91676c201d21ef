//! SRD Lookup Error Types

use std::time::Duration;

use thiserror::Error;

/// Lookup operation errors
#[derive(Error, Debug)]
pub enum SrdError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command on cooldown, retry in {:.1}s", retry_after.as_secs_f64())]
    OnCooldown { retry_after: Duration },

    #[error("Search backend error: {0}")]
    Search(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, SrdError>;
