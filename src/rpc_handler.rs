//! RPC method handler for the OPAC Search JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the `App`.

use std::sync::Mutex;

use crate::app::{App, AutoConfirm, Navigator};
use crate::types::errors::SearchError;

use serde_json::{json, Value};

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn search_error(err: SearchError) -> String {
    match err {
        SearchError::EmptyTerm => "empty term".to_string(),
        other => other.to_string(),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(
    app: &Mutex<App>,
    navigator: &mut dyn Navigator,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        // ─── Search ───
        "search.url" => {
            let term = str_param(params, "term")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let url = a.search_url(term).map_err(search_error)?;
            Ok(json!({"url": url}))
        }
        "search.submit" => {
            let term = str_param(params, "term")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let outcome = a.submit(term, navigator).map_err(search_error)?;
            serde_json::to_value(outcome).map_err(|e| e.to_string())
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.history()))
        }
        "history.remove" => {
            let term = str_param(params, "term")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.remove_history_item(term).map_err(|e| e.to_string())?;
            Ok(json!({"removed": removed}))
        }
        "history.clear" => {
            let confirmed = params
                .get("confirmed")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let cleared = a
                .clear_history(&mut AutoConfirm(confirmed))
                .map_err(|e| e.to_string())?;
            Ok(json!({"cleared": cleared}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"template": a.template(), "is_default": a.template_is_default()}))
        }
        "settings.set" => {
            let template = str_param(params, "template")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_template(template).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.reset_template().map_err(|e| e.to_string())?;
            Ok(json!({"template": a.template()}))
        }
        "settings.check" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            match a.check_template() {
                Ok(()) => Ok(json!({"valid": true})),
                Err(e) => Ok(json!({"valid": false, "reason": e.to_string()})),
            }
        }

        // ─── View ───
        "view.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"mode": a.view_mode()}))
        }
        "view.toggle" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mode = a.toggle_settings();
            Ok(json!({"mode": mode}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
