use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::errors::SettingsError;
use crate::platform;

/// Name of the database file inside the data directory.
pub const DEFAULT_DATABASE_FILENAME: &str = "database";

/// Top-level bark settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BarkSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub fetch: FetchSettings,
}

impl BarkSettings {
    /// Resolves the full path of the bookmark database file.
    ///
    /// Falls back to `$HOME/.bark` when no data directory is configured.
    pub fn database_path(&self) -> Result<PathBuf, SettingsError> {
        let data_dir = match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => platform::get_default_data_dir().ok_or_else(|| {
                SettingsError::Io("Could not determine home directory".to_string())
            })?,
        };
        Ok(data_dir.join(&self.storage.database_filename))
    }
}

/// Where the database lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// `None` means `$HOME/.bark`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_database_filename")]
    pub database_filename: String,
}

fn default_database_filename() -> String {
    DEFAULT_DATABASE_FILENAME.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            database_filename: default_database_filename(),
        }
    }
}

/// HTTP behaviour of the title fetcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("bark/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
