//! History Manager for OPAC Search.
//!
//! Implements `HistoryManagerTrait`: a bounded, deduplicated list of recent
//! search terms, most recent first, written through to the key-value store
//! as a JSON array after every change.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::{KeyValueStore, HISTORY_KEY};
use crate::types::errors::HistoryError;

/// Maximum number of terms kept in the history.
pub const HISTORY_CAP: usize = 10;

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn record(&mut self, term: &str) -> Result<(), HistoryError>;
    fn remove(&mut self, term: &str) -> Result<bool, HistoryError>;
    fn clear(&mut self) -> Result<(), HistoryError>;
    fn entries(&self) -> &[String];
}

/// Recent-searches list backed by a key-value store.
pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
    terms: Vec<String>,
}

impl SearchHistory {
    /// Reads the stored list once.
    ///
    /// A missing key, an unreadable store, or malformed JSON all yield an
    /// empty history. Stored data is re-normalised so the invariants hold
    /// even if another writer broke them.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let terms = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(saved) => normalize(saved),
                Err(e) => {
                    warn!(error = %e, "stored history is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored history, starting empty");
                Vec::new()
            }
        };
        debug!(count = terms.len(), "loaded search history");
        Self { store, terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Serializes the full list and writes it to the store.
    fn persist(&self) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&self.terms)
            .map_err(|e| HistoryError::Serialization(e.to_string()))?;
        self.store.set(HISTORY_KEY, &json)?;
        Ok(())
    }
}

/// Drops repeated terms (keeping the first, most recent one) and caps the length.
fn normalize(terms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(terms.len().min(HISTORY_CAP));
    for term in terms {
        if out.len() == HISTORY_CAP {
            break;
        }
        if !out.contains(&term) {
            out.push(term);
        }
    }
    out
}

impl HistoryManagerTrait for SearchHistory {
    /// Moves `term` to the front, inserting it if new, and evicts from the
    /// tail beyond [`HISTORY_CAP`]. Matching is exact and case-sensitive.
    fn record(&mut self, term: &str) -> Result<(), HistoryError> {
        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(HISTORY_CAP);
        self.persist()
    }

    /// Removes `term`. Returns `false` without touching the store when the
    /// term is not in the list.
    fn remove(&mut self, term: &str) -> Result<bool, HistoryError> {
        let Some(index) = self.terms.iter().position(|t| t == term) else {
            return Ok(false);
        };
        self.terms.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Empties the list. Asking the user first is the caller's job.
    fn clear(&mut self) -> Result<(), HistoryError> {
        self.terms.clear();
        self.persist()
    }

    fn entries(&self) -> &[String] {
        &self.terms
    }
}
