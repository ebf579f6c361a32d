use crate::error::{RentalError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DATABASE_FILENAME: &str = "movierent.sqlite3";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Environment variable that points at a different config directory.
pub const CONFIG_DIR_ENV: &str = "MOVIERENT_CONFIG_DIR";

/// Configuration for movierent, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RentalConfig {
    /// Path of the SQLite database file (defaults to the platform data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Milliseconds to wait on a database locked by another invocation
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            database: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "movierent", "movierent")
        .ok_or_else(|| RentalError::Config("Could not determine home directory".to_string()))
}

impl RentalConfig {
    /// The directory config.json is read from, honoring `MOVIERENT_CONFIG_DIR`.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        Ok(project_dirs()?.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RentalConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Picks the database path: explicit override, then config file, then the data dir.
    pub fn database_path(&self, overridden: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = overridden {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.database {
            return Ok(path.clone());
        }
        Ok(project_dirs()?.data_dir().join(DATABASE_FILENAME))
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}
