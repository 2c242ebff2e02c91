//! App Core for bark.
//!
//! Resolves settings into a ready-to-use bookmark store.

use std::path::PathBuf;

use tracing::debug;

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::title_fetcher::HttpTitleFetcher;
use crate::types::errors::AppError;

/// Central application struct holding the settings engine and the store.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub bookmarks: BookmarkManager,
}

impl App {
    /// Loads settings and builds the bookmark store.
    ///
    /// `config_path` overrides the settings file location; `db_path` overrides
    /// the database location derived from settings. Does not touch the
    /// database; call [`App::start`] for that.
    pub fn new(config_path: Option<PathBuf>, db_path: Option<PathBuf>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;

        let db_path = match db_path {
            Some(path) => path,
            None => settings.database_path()?,
        };
        debug!(db = %db_path.display(), config = %settings_engine.get_config_path().display(), "resolved paths");

        let fetcher = HttpTitleFetcher::new(&settings.fetch)?;
        let bookmarks = BookmarkManager::new(db_path, Box::new(fetcher));

        Ok(Self {
            settings_engine,
            bookmarks,
        })
    }

    /// Ensures the storage directory and schema exist.
    pub fn start(&self) -> Result<(), AppError> {
        self.bookmarks.initialize()?;
        Ok(())
    }
}
