//! App Core for OPAC Search.
//!
//! `App` is the one owned piece of session state: the search history, the
//! Base URL Template, the draft term and the current view mode. It is built
//! from an injected key-value store so tests can hand it a fresh
//! [`MemoryStore`] and inspect what was written.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::managers::history_manager::{HistoryManagerTrait, SearchHistory};
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::url_builder::{build_search_url, normalize_term};
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use crate::types::errors::{HistoryError, SearchError, SettingsError};
use crate::types::session::{SearchOutcome, ViewMode};

/// Question shown before wiping the history.
pub const CLEAR_HISTORY_PROMPT: &str = "Clear all search history?";

/// Opens a URL in a new browser tab. Fire-and-forget: nothing is reported back.
pub trait Navigator {
    fn open_in_new_tab(&mut self, url: &str);
}

/// Asks the user a yes/no question.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Navigator that hands URLs to the desktop's default browser.
#[derive(Debug, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_in_new_tab(&mut self, url: &str) {
        if let Err(e) = platform::open_url(url) {
            warn!(error = %e, "failed to launch browser");
        }
    }
}

/// Confirmer with a fixed answer, for `--yes` flags and pre-confirmed requests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Central session state.
pub struct App {
    history: SearchHistory,
    settings: SettingsEngine,
    view_mode: ViewMode,
    draft: String,
}

impl App {
    /// Loads history and template from `store`, once.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let settings = SettingsEngine::load(store.clone());
        let history = SearchHistory::load(store);
        Self {
            history,
            settings,
            view_mode: ViewMode::default(),
            draft: String::new(),
        }
    }

    /// Opens the SQLite store named by `config`.
    ///
    /// When the store cannot be opened the app still starts, on an in-memory
    /// store, so nothing persists past this run.
    pub fn open(config: &Config) -> Self {
        let path = config.database_path();
        let store: Arc<dyn KeyValueStore> = match SqliteStore::open(&path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "store unavailable, history will not persist");
                Arc::new(MemoryStore::new())
            }
        };
        Self::new(store)
    }

    // ─── Search ───

    /// Builds the URL for `input` without side effects.
    pub fn search_url(&self, input: &str) -> Result<String, SearchError> {
        let term = normalize_term(input)?;
        build_search_url(self.settings.get_template(), term)
    }

    /// Runs a search: builds the URL, opens it, then records the term.
    ///
    /// A malformed template is logged and returned; nothing is opened or
    /// recorded. A failed history write is logged and reported through
    /// [`SearchOutcome::history_saved`] without failing the search.
    pub fn submit(
        &mut self,
        input: &str,
        navigator: &mut dyn Navigator,
    ) -> Result<SearchOutcome, SearchError> {
        let term = normalize_term(input)?.to_string();
        let url = match build_search_url(self.settings.get_template(), &term) {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, "cannot build search URL from stored template");
                return Err(e);
            }
        };

        navigator.open_in_new_tab(&url);
        info!(term = %term, "opened catalog search");

        let history_saved = match self.history.record(&term) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to persist search history");
                false
            }
        };
        self.draft.clear();

        Ok(SearchOutcome {
            term,
            url,
            history_saved,
        })
    }

    /// Submits the current draft term.
    pub fn submit_draft(
        &mut self,
        navigator: &mut dyn Navigator,
    ) -> Result<SearchOutcome, SearchError> {
        let draft = self.draft.clone();
        self.submit(&draft, navigator)
    }

    /// Re-runs a search picked from the history list.
    pub fn search_again(
        &mut self,
        term: &str,
        navigator: &mut dyn Navigator,
    ) -> Result<SearchOutcome, SearchError> {
        self.submit(term, navigator)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the draft holds anything besides whitespace.
    pub fn can_submit(&self) -> bool {
        normalize_term(&self.draft).is_ok()
    }

    // ─── History ───

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn remove_history_item(&mut self, term: &str) -> Result<bool, HistoryError> {
        self.history.remove(term)
    }

    /// Clears the history if `confirmer` agrees. Returns whether it was cleared.
    pub fn clear_history(&mut self, confirmer: &mut dyn Confirmer) -> Result<bool, HistoryError> {
        if !confirmer.confirm(CLEAR_HISTORY_PROMPT) {
            return Ok(false);
        }
        self.history.clear()?;
        info!("search history cleared");
        Ok(true)
    }

    // ─── Settings ───

    pub fn template(&self) -> &str {
        self.settings.get_template()
    }

    pub fn template_is_default(&self) -> bool {
        self.settings.is_default()
    }

    pub fn set_template(&mut self, template: impl Into<String>) -> Result<(), SettingsError> {
        self.settings.set_template(template.into())
    }

    pub fn reset_template(&mut self) -> Result<(), SettingsError> {
        self.settings.reset_template()
    }

    pub fn check_template(&self) -> Result<(), SettingsError> {
        self.settings.validate_template()
    }

    // ─── View ───

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn toggle_settings(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// Leaves the settings panel. The template is already saved on every edit.
    pub fn close_settings(&mut self) {
        self.view_mode = ViewMode::Search;
    }
}
