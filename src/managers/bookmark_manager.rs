//! Bookmark store for bark.
//!
//! Implements `BookmarkManagerTrait`: schema initialization, add, list,
//! lookup, archive, and delete, backed by SQLite via `rusqlite`.
//!
//! Every operation opens its own [`Database`] and drops it before returning,
//! so no connection outlives a call.

use rusqlite::{params, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::database::Database;
use crate::services::clock::{Clock, SystemClock};
use crate::services::hostname::extract_hostname;
use crate::services::title_fetcher::TitleFetcher;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

const SELECT_COLUMNS: &str = "SELECT uuid, added_ts, archived_ts, title, url FROM bookmarks";

/// Trait defining bookmark store operations.
pub trait BookmarkManagerTrait {
    fn initialize(&self) -> Result<(), BookmarkError>;
    fn list_active(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    fn list_archived(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    fn get_by_id(&self, id: &str) -> Result<Bookmark, BookmarkError>;
    /// Fetches the page title, stores a new active bookmark, and returns the title.
    fn add(&self, url: &str) -> Result<String, BookmarkError>;
    fn archive(&self, id: &str) -> Result<(), BookmarkError>;
    fn delete(&self, id: &str) -> Result<(), BookmarkError>;
    fn count_active(&self) -> Result<i64, BookmarkError>;
    fn count_archived(&self) -> Result<i64, BookmarkError>;
}

/// Bookmark store rooted at a single SQLite file.
pub struct BookmarkManager {
    db_path: PathBuf,
    fetcher: Box<dyn TitleFetcher>,
    clock: Box<dyn Clock>,
}

impl BookmarkManager {
    /// Creates a store for the database file at `db_path`.
    ///
    /// Nothing touches the disk until [`BookmarkManagerTrait::initialize`] runs.
    pub fn new<P: Into<PathBuf>>(db_path: P, fetcher: Box<dyn TitleFetcher>) -> Self {
        Self {
            db_path: db_path.into(),
            fetcher,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the system clock, e.g. with a deterministic one in tests.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Database, BookmarkError> {
        Ok(Database::connect(&self.db_path)?)
    }

    /// Reads a single `Bookmark` row and derives its hostname.
    fn row_to_bookmark(row: &Row) -> rusqlite::Result<Bookmark> {
        let url: String = row.get(4)?;
        let hostname = extract_hostname(&url);
        Ok(Bookmark {
            id: row.get(0)?,
            added_at: row.get(1)?,
            archived_at: row.get(2)?,
            title: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            url,
            hostname,
        })
    }

    fn query_bookmarks(&self, sql: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        let db = self.connect()?;
        let mut stmt = db.connection().prepare(sql)?;
        let rows = stmt.query_map([], Self::row_to_bookmark)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn count_where(&self, predicate: &str) -> Result<i64, BookmarkError> {
        let db = self.connect()?;
        let sql = format!("SELECT COUNT(*) FROM bookmarks WHERE {}", predicate);
        Ok(db.connection().query_row(&sql, [], |row| row.get(0))?)
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Creates the data directory and schema. Safe to call on every start.
    fn initialize(&self) -> Result<(), BookmarkError> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Database::open(&self.db_path)?;
        debug!(path = %self.db_path.display(), "bookmark store initialized");
        Ok(())
    }

    /// Active bookmarks in storage order.
    fn list_active(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.query_bookmarks(&format!("{} WHERE archived_ts IS NULL", SELECT_COLUMNS))
    }

    /// Archived bookmarks, oldest archive first.
    fn list_archived(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.query_bookmarks(&format!(
            "{} WHERE archived_ts IS NOT NULL ORDER BY archived_ts",
            SELECT_COLUMNS
        ))
    }

    fn get_by_id(&self, id: &str) -> Result<Bookmark, BookmarkError> {
        let db = self.connect()?;
        db.connection()
            .query_row(
                &format!("{} WHERE uuid = ?1", SELECT_COLUMNS),
                params![id],
                Self::row_to_bookmark,
            )
            .optional()?
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))
    }

    /// The title is fetched before the database is opened; a failed fetch
    /// leaves the store untouched.
    fn add(&self, url: &str) -> Result<String, BookmarkError> {
        let title = self.fetcher.fetch_title(url).map_err(|e| {
            warn!(url, error = %e, "title fetch failed, bookmark not added");
            e
        })?;

        let id = Uuid::new_v4().to_string();
        let added_at = self.clock.now();

        let db = self.connect()?;
        db.connection().execute(
            "INSERT INTO bookmarks (uuid, added_ts, url, title) VALUES (?1, ?2, ?3, ?4)",
            params![id, added_at, url, title],
        )?;

        info!(id = %id, url, "bookmark added");
        Ok(title)
    }

    /// Stamps an active bookmark as archived.
    ///
    /// Archiving is one-way: an archived bookmark keeps its original timestamp
    /// and the call reports [`BookmarkError::AlreadyArchived`].
    fn archive(&self, id: &str) -> Result<(), BookmarkError> {
        let archived_at = self.clock.now();

        let db = self.connect()?;
        let conn = db.connection();
        let affected = conn.execute(
            "UPDATE bookmarks SET archived_ts = ?1 WHERE uuid = ?2 AND archived_ts IS NULL",
            params![archived_at, id],
        )?;

        if affected == 0 {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE uuid = ?1)",
                params![id],
                |row| row.get(0),
            )?;
            return Err(if exists {
                BookmarkError::AlreadyArchived(id.to_string())
            } else {
                BookmarkError::NotFound(id.to_string())
            });
        }

        info!(id, archived_at, "bookmark archived");
        Ok(())
    }

    /// Permanently removes a bookmark in either state.
    fn delete(&self, id: &str) -> Result<(), BookmarkError> {
        let db = self.connect()?;
        let affected = db
            .connection()
            .execute("DELETE FROM bookmarks WHERE uuid = ?1", params![id])?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }

        info!(id, "bookmark deleted");
        Ok(())
    }

    fn count_active(&self) -> Result<i64, BookmarkError> {
        self.count_where("archived_ts IS NULL")
    }

    fn count_archived(&self) -> Result<i64, BookmarkError> {
        self.count_where("archived_ts IS NOT NULL")
    }
}
