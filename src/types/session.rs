use serde::{Deserialize, Serialize};

/// Which panel of the search widget is showing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Search,
    Settings,
}

impl ViewMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Search => ViewMode::Settings,
            ViewMode::Settings => ViewMode::Search,
        }
    }
}

/// Result of a search that reached the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The trimmed term that was searched for and recorded.
    pub term: String,
    /// The catalog URL handed to the navigator.
    pub url: String,
    /// Whether the term was persisted to history. `false` means the
    /// store write failed; the in-memory history is still updated.
    pub history_saved: bool,
}
