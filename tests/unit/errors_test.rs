use std::error::Error;

use bark::types::errors::*;
use rusqlite::ffi;

// === BookmarkError Tests ===

#[test]
fn bookmark_error_not_found_display() {
    let err = BookmarkError::NotFound("bm-123".to_string());
    assert_eq!(err.to_string(), "Bookmark not found: bm-123");
}

#[test]
fn bookmark_error_already_archived_display() {
    let err = BookmarkError::AlreadyArchived("bm-456".to_string());
    assert_eq!(err.to_string(), "Bookmark already archived: bm-456");
}

#[test]
fn bookmark_error_conflict_display() {
    let err = BookmarkError::Conflict("UNIQUE constraint failed: bookmarks.added_ts".to_string());
    assert_eq!(
        err.to_string(),
        "Bookmark constraint violation: UNIQUE constraint failed: bookmarks.added_ts"
    );
}

#[test]
fn bookmark_error_wraps_fetch_error() {
    let err = BookmarkError::from(FetchError::MissingTitle("https://example.com".to_string()));
    assert_eq!(
        err.to_string(),
        "Failed to fetch bookmark title: No title found at https://example.com"
    );
    assert!(err.source().is_some());
}

#[test]
fn bookmark_error_from_io_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = BookmarkError::from(io);
    assert!(matches!(err, BookmarkError::Io(_)));
    assert!(err.to_string().starts_with("Bookmark I/O error: "));
    assert!(err.source().is_some());
}

#[test]
fn bookmark_error_classifies_constraint_violation() {
    let sqlite_err = rusqlite::Error::SqliteFailure(
        ffi::Error::new(ffi::SQLITE_CONSTRAINT_UNIQUE),
        Some("UNIQUE constraint failed: bookmarks.added_ts".to_string()),
    );
    match BookmarkError::from(sqlite_err) {
        BookmarkError::Conflict(msg) => {
            assert_eq!(msg, "UNIQUE constraint failed: bookmarks.added_ts")
        }
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[test]
fn bookmark_error_other_sqlite_failures_are_storage() {
    let err = BookmarkError::from(rusqlite::Error::QueryReturnedNoRows);
    assert!(matches!(err, BookmarkError::Storage(_)));
    assert!(err.source().is_some());
}

// === FetchError Tests ===

#[test]
fn fetch_error_display_variants() {
    assert_eq!(
        FetchError::InvalidUrl("nope".to_string()).to_string(),
        "Invalid URL: nope"
    );
    assert_eq!(
        FetchError::Network("connection refused".to_string()).to_string(),
        "Title fetch network error: connection refused"
    );
    assert_eq!(
        FetchError::Status {
            url: "https://example.com".to_string(),
            status: 503
        }
        .to_string(),
        "Unexpected HTTP status 503 for https://example.com"
    );
    assert_eq!(
        FetchError::MissingTitle("https://example.com".to_string()).to_string(),
        "No title found at https://example.com"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::Io("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::Serialization("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("not a number".to_string()).to_string(),
        "Invalid settings value: not a number"
    );
}

// === AppError Tests ===

#[test]
fn app_error_is_transparent() {
    let err = AppError::from(SettingsError::InvalidKey("x".to_string()));
    assert_eq!(err.to_string(), "Invalid settings key: x");
}
