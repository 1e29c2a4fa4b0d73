//! Linx storage layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! [`KeyValueStorage`] seam the tree store persists through.
//!
//! # Usage
//!
//! ```no_run
//! use linx::database::{Database, KeyValueStorage};
//!
//! let db = Database::open("linx.db").expect("failed to open database");
//! db.set_item("categories", "[]").expect("write failed");
//! assert_eq!(db.get_item("categories").unwrap().as_deref(), Some("[]"));
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;

use crate::types::errors::StorageError;

/// Device-local key-value storage holding whole string documents.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
