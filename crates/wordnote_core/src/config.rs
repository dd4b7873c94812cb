//! Runtime configuration resolved from environment variables.
//!
//! # Invariants
//! - Blank or whitespace-only values fall back to defaults.
//! - Resolution never fails; validation of individual values happens where
//!   they are used (e.g. `init_logging`).

use crate::logging::default_log_level;
use crate::store::note_store::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "WORDNOTE_DB_PATH";
pub const ENV_STORAGE_KEY: &str = "WORDNOTE_STORAGE_KEY";
pub const ENV_LOG_LEVEL: &str = "WORDNOTE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "WORDNOTE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "wordnote.sqlite3";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    /// Key holding the serialized note collection.
    pub storage_key: String,
    pub log_level: String,
    /// File logging is enabled only when set.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        Self {
            db_path: value(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            storage_key: value(ENV_STORAGE_KEY).unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            log_level: value(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}
