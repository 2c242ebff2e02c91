// bark state managers
// The bookmark store owns the bookmarks table and every query against it.

pub mod bookmark_manager;
