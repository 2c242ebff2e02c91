use serde::{Deserialize, Serialize};

/// A saved bookmark as read back from the store.
///
/// `hostname` is never persisted; it is derived from `url` on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub added_at: i64,
    pub archived_at: Option<i64>,
    pub title: String,
    pub url: String,
    pub hostname: String,
}

/// Lifecycle state of a bookmark row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkState {
    Active,
    Archived,
}

impl Bookmark {
    pub fn state(&self) -> BookmarkState {
        match self.archived_at {
            Some(_) => BookmarkState::Archived,
            None => BookmarkState::Active,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.state() == BookmarkState::Archived
    }
}
