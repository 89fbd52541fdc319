//! Tests for the App session: search flow, history gating, settings and view mode.

use std::sync::Arc;

use tempfile::TempDir;

use opac_search::app::{App, AutoConfirm, Confirmer, Navigator, CLEAR_HISTORY_PROMPT};
use opac_search::config::Config;
use opac_search::services::settings_engine::DEFAULT_BASE_URL;
use opac_search::storage::{KeyValueStore, MemoryStore, HISTORY_KEY, TEMPLATE_KEY};
use opac_search::types::errors::SearchError;
use opac_search::types::session::ViewMode;

/// Navigator that remembers what it was asked to open.
#[derive(Default)]
struct RecordingNavigator {
    opened: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn open_in_new_tab(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

/// Confirmer that records the prompt it was shown.
struct ScriptedConfirmer {
    answer: bool,
    prompts: Vec<String>,
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

fn setup() -> (Arc<MemoryStore>, App) {
    let store = Arc::new(MemoryStore::new());
    let app = App::new(store.clone());
    (store, app)
}

#[test]
fn test_fresh_store_defaults() {
    let (store, app) = setup();
    assert!(app.history().is_empty());
    assert_eq!(app.template(), DEFAULT_BASE_URL);
    assert!(app.template_is_default());
    assert_eq!(app.view_mode(), ViewMode::Search);
    assert_eq!(store.writes(), 0);
}

#[test]
fn test_submit_opens_url_then_records_trimmed_term() {
    let (store, mut app) = setup();
    app.set_template("http://lib.example/search?find_code=WRD&request=old&pds_handle=GUEST")
        .unwrap();
    let mut nav = RecordingNavigator::default();

    let outcome = app.submit("  十分钟冥想 ", &mut nav).unwrap();

    assert_eq!(outcome.term, "十分钟冥想");
    assert!(outcome.history_saved);
    assert_eq!(nav.opened, vec![outcome.url.clone()]);
    assert!(outcome.url.contains("find_code=WRD"));
    assert!(outcome.url.contains("pds_handle=GUEST"));
    assert_eq!(app.history(), ["十分钟冥想"]);
    assert_eq!(
        store.get(HISTORY_KEY).unwrap().as_deref(),
        Some(r#"["十分钟冥想"]"#)
    );
}

#[test]
fn test_blank_submit_is_rejected() {
    let (store, mut app) = setup();
    let mut nav = RecordingNavigator::default();
    app.set_draft("   ");
    assert!(!app.can_submit());
    assert_eq!(app.submit_draft(&mut nav), Err(SearchError::EmptyTerm));
    assert!(nav.opened.is_empty());
    assert!(app.history().is_empty());
    assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
}

#[test]
fn test_malformed_template_opens_nothing_and_records_nothing() {
    let (_, mut app) = setup();
    app.set_template("this is not a url").unwrap();
    app.set_draft("Dune");
    let mut nav = RecordingNavigator::default();

    let result = app.submit_draft(&mut nav);

    assert!(matches!(result, Err(SearchError::MalformedTemplate { .. })));
    assert!(nav.opened.is_empty());
    assert!(app.history().is_empty());
    // The draft is kept so the user can retry after fixing the template.
    assert_eq!(app.draft(), "Dune");
    assert!(app.check_template().is_err());
}

#[test]
fn test_successful_submit_clears_draft() {
    let (_, mut app) = setup();
    app.set_draft("Dune");
    assert!(app.can_submit());
    app.submit_draft(&mut RecordingNavigator::default()).unwrap();
    assert_eq!(app.draft(), "");
}

#[test]
fn test_search_again_moves_entry_to_front() {
    let (_, mut app) = setup();
    let mut nav = RecordingNavigator::default();
    app.submit("A", &mut nav).unwrap();
    app.submit("B", &mut nav).unwrap();
    app.search_again("A", &mut nav).unwrap();
    assert_eq!(app.history(), ["A", "B"]);
    assert_eq!(nav.opened.len(), 3);
    assert_eq!(nav.opened[0], nav.opened[2]);
}

#[test]
fn test_search_url_has_no_side_effects() {
    let (store, app) = setup();
    let url = app.search_url("Dune").unwrap();
    assert!(url.contains("request=Dune"));
    assert!(app.history().is_empty());
    assert_eq!(store.writes(), 0);
}

#[test]
fn test_clear_declined_keeps_history() {
    let (_, mut app) = setup();
    let mut nav = RecordingNavigator::default();
    app.submit("A", &mut nav).unwrap();
    app.submit("B", &mut nav).unwrap();

    let mut confirmer = ScriptedConfirmer {
        answer: false,
        prompts: Vec::new(),
    };
    assert!(!app.clear_history(&mut confirmer).unwrap());
    assert_eq!(confirmer.prompts, vec![CLEAR_HISTORY_PROMPT.to_string()]);
    assert_eq!(app.history(), ["B", "A"]);
}

#[test]
fn test_clear_accepted_empties_history() {
    let (store, mut app) = setup();
    app.submit("A", &mut RecordingNavigator::default()).unwrap();
    assert!(app.clear_history(&mut AutoConfirm(true)).unwrap());
    assert!(app.history().is_empty());
    assert_eq!(store.get(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_remove_history_item() {
    let (_, mut app) = setup();
    let mut nav = RecordingNavigator::default();
    app.submit("A", &mut nav).unwrap();
    app.submit("B", &mut nav).unwrap();
    assert!(app.remove_history_item("A").unwrap());
    assert!(!app.remove_history_item("A").unwrap());
    assert_eq!(app.history(), ["B"]);
}

#[test]
fn test_reset_template_persists_default() {
    let (store, mut app) = setup();
    app.set_template("http://other.example/?request=").unwrap();
    app.reset_template().unwrap();
    assert_eq!(app.template(), DEFAULT_BASE_URL);
    assert_eq!(store.get(TEMPLATE_KEY).unwrap().as_deref(), Some(DEFAULT_BASE_URL));
}

#[test]
fn test_view_mode_toggle() {
    let (_, mut app) = setup();
    assert_eq!(app.toggle_settings(), ViewMode::Settings);
    assert_eq!(app.toggle_settings(), ViewMode::Search);
    app.toggle_settings();
    app.close_settings();
    assert_eq!(app.view_mode(), ViewMode::Search);
}

#[test]
fn test_open_persists_between_sessions() {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        data_dir: tmp.path().join("data"),
        log_filter: "warn".to_string(),
    };
    {
        let mut app = App::open(&config);
        app.submit("Dune", &mut RecordingNavigator::default()).unwrap();
    }
    let app = App::open(&config);
    assert_eq!(app.history(), ["Dune"]);
}

#[test]
fn test_open_falls_back_when_store_unavailable() {
    let tmp = TempDir::new().unwrap();
    // A regular file where the data directory should be.
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let config = Config {
        data_dir: blocker,
        log_filter: "warn".to_string(),
    };

    let mut app = App::open(&config);
    assert!(app.history().is_empty());
    assert_eq!(app.template(), DEFAULT_BASE_URL);
    let outcome = app.submit("Dune", &mut RecordingNavigator::default()).unwrap();
    assert!(outcome.history_saved);
}
