// OPAC Search state managers
// Managers handle stateful operations backed by the key-value store.

pub mod history_manager;
