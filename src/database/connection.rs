//! SQLite connection management for bark.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`.
//! A `Database` is meant to be short-lived: the bookmark store opens one per
//! operation and drops it before returning.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use super::migrations;

/// Core database wrapper providing SQLite connection management.
///
/// The underlying connection is closed when the `Database` is dropped.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path and runs migrations.
    ///
    /// # Arguments
    /// * `path` - File system path where the SQLite database file will be stored.
    ///   Its parent directory must already exist.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Opens an existing database file for reading and writing.
    ///
    /// Never creates the file and never runs migrations, so a store that was
    /// not initialized fails here instead of silently producing an empty file.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` (`SQLITE_CANTOPEN`) if the file does not exist.
    pub fn connect<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        Ok(Self { conn })
    }

    /// Opens an in-memory SQLite database and runs migrations.
    ///
    /// Useful for testing the schema; the database is discarded on drop.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or migrations fail.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    fn run_migrations(&self) -> Result<(), rusqlite::Error> {
        migrations::run_all(&self.conn)
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
