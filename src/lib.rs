//! OPAC Search — build library catalog search URLs and keep a short local
//! history of recent searches.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod config;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
