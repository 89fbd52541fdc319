//! Runtime configuration for the OPAC Search binaries.
//!
//! Resolution order for the data directory: explicit override (`--data-dir`),
//! then `OPAC_SEARCH_DATA_DIR`, then the platform data directory. The log
//! filter comes from `--log-filter`, then `OPAC_SEARCH_LOG`, then `warn`.

use std::env;
use std::path::PathBuf;

use crate::platform;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "OPAC_SEARCH_DATA_DIR";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "OPAC_SEARCH_LOG";

/// File name of the SQLite store inside the data directory.
pub const DATABASE_FILE: &str = "opac-search.db";

/// Filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: platform::get_data_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from command-line overrides and the environment.
    pub fn resolve(data_dir: Option<PathBuf>, log_filter: Option<String>) -> Self {
        Self::resolve_with(
            data_dir,
            log_filter,
            env::var(DATA_DIR_ENV).ok(),
            env::var(LOG_FILTER_ENV).ok(),
        )
    }

    fn resolve_with(
        data_dir: Option<PathBuf>,
        log_filter: Option<String>,
        env_data_dir: Option<String>,
        env_log_filter: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        let data_dir = data_dir
            .or_else(|| env_data_dir.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or(defaults.data_dir);
        let log_filter = log_filter
            .or_else(|| env_log_filter.filter(|v| !v.is_empty()))
            .unwrap_or(defaults.log_filter);
        Self {
            data_dir,
            log_filter,
        }
    }

    /// Path of the SQLite store.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
