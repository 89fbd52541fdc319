//! SQLite-backed key-value store.
//!
//! Provides [`SqliteStore`], which wraps a `rusqlite::Connection` and runs
//! schema migrations on open.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

use super::migrations;
use super::KeyValueStore;
use crate::types::errors::StoreError;

/// Durable key-value store in a single SQLite file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at `path` and runs migrations.
    ///
    /// Parent directories are created when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Unavailable(format!(
                        "Failed to create data directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.run_migrations()?;
        debug!(path = %path.display(), "opened sqlite store");
        Ok(store)
    }

    /// Opens an in-memory SQLite store and runs migrations.
    ///
    /// The contents are discarded when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<(), StoreError> {
        migrations::run_all(&self.conn)?;
        Ok(())
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, migrations::now()],
        )?;
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}
