//! bark database layer.
//!
//! Provides SQLite connection management and schema migrations.
//!
//! # Usage
//!
//! ```no_run
//! use bark::database::Database;
//!
//! // Create the file and schema
//! let db = Database::open("/tmp/bark/database").expect("failed to open database");
//! drop(db);
//!
//! // Later connections reuse the existing file
//! let db = Database::connect("/tmp/bark/database").expect("failed to connect");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
