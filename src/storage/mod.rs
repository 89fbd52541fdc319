//! Persistent key-value storage for OPAC Search.
//!
//! Search history and the Base URL Template are each stored as one string
//! value under a fixed key. [`SqliteStore`] keeps them on disk across
//! restarts; [`MemoryStore`] keeps them for the lifetime of the process and
//! is what tests inject in place of the real store.
//!
//! # Usage
//!
//! ```no_run
//! use opac_search::storage::{KeyValueStore, SqliteStore};
//!
//! let store = SqliteStore::open("opac-search.db").expect("failed to open store");
//! store.set("greeting", "hello").expect("write failed");
//! assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
//! ```

pub mod migrations;
pub mod sqlite;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::types::errors::StoreError;

pub use sqlite::SqliteStore;

/// Key holding the JSON-encoded recent-searches list.
pub const HISTORY_KEY: &str = "scu_search_history";

/// Key holding the Base URL Template string.
pub const TEMPLATE_KEY: &str = "scu_base_url";

/// A synchronous string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    /// Seeding does not count as a write.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Mutex::new(values),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `set` calls served so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.values
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("memory store poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
