use std::error::Error;

use opac_search::types::errors::*;

// === SearchError Tests ===

#[test]
fn search_error_display_variants() {
    assert_eq!(SearchError::EmptyTerm.to_string(), "Search term is empty");
    assert_eq!(
        SearchError::MalformedTemplate {
            template: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        }
        .to_string(),
        "Malformed template URL 'nope': relative URL without a base"
    );
}

#[test]
fn search_error_implements_error_trait() {
    let err: Box<dyn Error> = Box::new(SearchError::EmptyTerm);
    assert!(err.source().is_none());
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Database("disk I/O error".to_string()).to_string(),
        "Store database error: disk I/O error"
    );
    assert_eq!(
        StoreError::Unavailable("read-only".to_string()).to_string(),
        "Store unavailable: read-only"
    );
}

#[test]
fn store_error_from_rusqlite() {
    let err: StoreError = rusqlite_error().into();
    assert!(matches!(err, StoreError::Database(_)));
}

fn rusqlite_error() -> rusqlite::Error {
    rusqlite::Error::InvalidQuery
}

// === HistoryError Tests ===

#[test]
fn history_error_display_and_source() {
    let err = HistoryError::from(StoreError::Unavailable("gone".to_string()));
    assert_eq!(
        err.to_string(),
        "History storage error: Store unavailable: gone"
    );
    assert!(err.source().is_some());

    let err = HistoryError::Serialization("bad".to_string());
    assert_eq!(err.to_string(), "History serialization error: bad");
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_and_source() {
    let err = SettingsError::from(StoreError::Database("locked".to_string()));
    assert_eq!(
        err.to_string(),
        "Settings storage error: Store database error: locked"
    );
    assert!(err.source().is_some());

    let err = SettingsError::InvalidTemplate("empty host".to_string());
    assert_eq!(err.to_string(), "Invalid template: empty host");
    assert!(err.source().is_none());
}
