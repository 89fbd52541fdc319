use std::fmt;

// === SearchError ===

/// Errors raised while turning a search term into a catalog URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The trimmed search term is empty.
    EmptyTerm,
    /// The stored Base URL Template does not parse as a URL.
    MalformedTemplate { template: String, reason: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyTerm => write!(f, "Search term is empty"),
            SearchError::MalformedTemplate { template, reason } => {
                write!(f, "Malformed template URL '{}': {}", template, reason)
            }
        }
    }
}

impl std::error::Error for SearchError {}

// === StoreError ===

/// Errors raised by a key-value store backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying database rejected the operation.
    Database(String),
    /// The store could not be opened or is not reachable.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Store database error: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

// === HistoryError ===

/// Errors related to the recent-searches list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Persisting the list failed. The in-memory list keeps the new state.
    Storage(StoreError),
    /// The list could not be encoded for storage.
    Serialization(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Storage(err) => write!(f, "History storage error: {}", err),
            HistoryError::Serialization(msg) => {
                write!(f, "History serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Storage(err) => Some(err),
            HistoryError::Serialization(_) => None,
        }
    }
}

impl From<StoreError> for HistoryError {
    fn from(err: StoreError) -> Self {
        HistoryError::Storage(err)
    }
}

// === SettingsError ===

/// Errors related to Base URL Template management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Persisting the template failed. The in-memory template keeps the new value.
    Storage(StoreError),
    /// The template does not parse as a URL (only reported by explicit checks).
    InvalidTemplate(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Storage(err) => write!(f, "Settings storage error: {}", err),
            SettingsError::InvalidTemplate(msg) => write!(f, "Invalid template: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Storage(err) => Some(err),
            SettingsError::InvalidTemplate(_) => None,
        }
    }
}

impl From<StoreError> for SettingsError {
    fn from(err: StoreError) -> Self {
        SettingsError::Storage(err)
    }
}
