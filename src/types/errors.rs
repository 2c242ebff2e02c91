use rusqlite::ErrorCode;
use thiserror::Error;

// === BookmarkError ===

/// Errors related to bookmark store operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// The storage directory or database file could not be created or opened.
    #[error("Bookmark I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A query, statement, or row scan failed.
    #[error("Bookmark storage error: {0}")]
    Storage(#[source] rusqlite::Error),
    /// A unique or not-null constraint rejected the write.
    #[error("Bookmark constraint violation: {0}")]
    Conflict(String),
    /// No bookmark with the given ID exists.
    #[error("Bookmark not found: {0}")]
    NotFound(String),
    /// The bookmark already carries an archive timestamp.
    #[error("Bookmark already archived: {0}")]
    AlreadyArchived(String),
    /// The page title could not be fetched, so nothing was stored.
    #[error("Failed to fetch bookmark title: {0}")]
    TitleFetch(#[from] FetchError),
}

impl From<rusqlite::Error> for BookmarkError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == ErrorCode::ConstraintViolation =>
            {
                BookmarkError::Conflict(message.unwrap_or_else(|| code.to_string()))
            }
            other => BookmarkError::Storage(other),
        }
    }
}

// === FetchError ===

/// Errors raised while fetching a page title.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request could not be sent or the body could not be read.
    #[error("Title fetch network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },
    /// The page has no usable `<title>` element.
    #[error("No title found at {0}")]
    MissingTitle(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === AppError ===

/// Errors raised while assembling the application from its settings.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),
}
