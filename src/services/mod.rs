// OPAC Search services
// Stateless URL building and the persisted Base URL Template.

pub mod settings_engine;
pub mod url_builder;
