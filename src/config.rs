use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::srd::embed::PHB_COLOUR;
use crate::core::srd::paginator::{DEFAULT_CONTINUATION_LIMIT, DEFAULT_HARD_SPLIT_THRESHOLD};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bot: BotConfig,
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

/// Chat command behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Command prefix, also quoted in footer hints.
    pub prefix: String,
    /// Seconds between uses of one command by one user. 0 disables.
    pub cooldown_secs: u64,
    /// Requests shorter than this (after trimming) are refused before searching.
    pub min_query_chars: usize,
    /// RGB colour for every embed.
    pub embed_colour: u32,
}

/// Message-size limits for long text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Chunk size for continuation embeds (spell descriptions).
    pub continuation_limit: usize,
    /// Cut point for the two-part split (monster actions, feature text).
    pub hard_split_threshold: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
    /// Write JSON logs to a daily rolling file.
    pub file_enabled: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: ";".to_string(),
            cooldown_secs: 2,
            min_query_chars: 3,
            embed_colour: PHB_COLOUR,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            continuation_limit: DEFAULT_CONTINUATION_LIMIT,
            hard_split_threshold: DEFAULT_HARD_SPLIT_THRESHOLD,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_enabled: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/srd-lookup/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::load_from(&config_path) {
            Ok(config) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            Err(ConfigError::Io { .. }) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Strictly load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Resolved log directory (override or XDG data dir).
    pub fn log_dir(&self) -> PathBuf {
        self.logging.log_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("srd-lookup").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("srd-lookup").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
