// OPAC Search Settings Engine
// Manages the Base URL Template: loading, updating, and resetting to the built-in default.
// The template is written through to the key-value store on every change.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::services::url_builder;
use crate::storage::{KeyValueStore, TEMPLATE_KEY};
use crate::types::errors::SettingsError;

/// Built-in catalog search URL for Sichuan University's OPAC.
///
/// The path segment after `/F/` is a server session id; the library hands out
/// new ones, so users are expected to paste a fresh search URL when it expires.
pub const DEFAULT_BASE_URL: &str = "http://opac.scu.edu.cn:8080/F/9F63EJD6J8RI1731DPHAUF7B5FM4JB151M4D369YC7XFUCITEF-09218?func=find-m&find_code=WRD&request=%E5%8D%81%E5%88%86%E9%92%9F%E5%86%A5%E6%83%B3&find_base=CNPUB&find_base=ENPUB&pds_handle=GUEST&pds_handle=GUEST";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn get_template(&self) -> &str;
    fn set_template(&mut self, template: String) -> Result<(), SettingsError>;
    fn reset_template(&mut self) -> Result<(), SettingsError>;
    fn is_default(&self) -> bool;
    fn validate_template(&self) -> Result<(), SettingsError>;
}

/// Settings engine holding the current template in memory.
pub struct SettingsEngine {
    store: Arc<dyn KeyValueStore>,
    template: String,
}

impl SettingsEngine {
    /// Loads the stored template, falling back to [`DEFAULT_BASE_URL`] when the
    /// key is missing or the store cannot be read.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let template = match store.get(TEMPLATE_KEY) {
            Ok(Some(saved)) => {
                debug!("loaded stored template");
                saved
            }
            Ok(None) => DEFAULT_BASE_URL.to_string(),
            Err(e) => {
                warn!(error = %e, "could not read stored template, using default");
                DEFAULT_BASE_URL.to_string()
            }
        };
        Self { store, template }
    }

    fn persist(&self) -> Result<(), SettingsError> {
        self.store.set(TEMPLATE_KEY, &self.template)?;
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    fn get_template(&self) -> &str {
        &self.template
    }

    /// Replaces the template. No validation happens here; a bad template only
    /// surfaces when a search is built from it.
    fn set_template(&mut self, template: String) -> Result<(), SettingsError> {
        self.template = template;
        self.persist()
    }

    fn reset_template(&mut self) -> Result<(), SettingsError> {
        self.template = DEFAULT_BASE_URL.to_string();
        self.persist()
    }

    fn is_default(&self) -> bool {
        self.template == DEFAULT_BASE_URL
    }

    /// Checks that the current template parses as a URL.
    fn validate_template(&self) -> Result<(), SettingsError> {
        url_builder::parse_template(&self.template)
            .map(|_| ())
            .map_err(|e| SettingsError::InvalidTemplate(e.to_string()))
    }
}
