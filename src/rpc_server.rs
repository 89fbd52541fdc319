//! OPAC Search RPC Server — JSON-RPC over stdin/stdout for embedding in a UI shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"search.submit", "params":{"term":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use clap::Parser;
use serde_json::{json, Value};
use tracing::{debug, error};

use opac_search::app::{App, SystemNavigator};
use opac_search::config::Config;
use opac_search::logging;
use opac_search::rpc_handler::handle_method;

#[derive(Parser)]
#[command(name = "opac-search-rpc", version, about = "Line-delimited JSON-RPC front end for OPAC Search")]
struct Args {
    /// Directory holding the search history database.
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,

    /// `tracing` filter directive, e.g. `debug` or `opac_search=info`.
    #[arg(long)]
    log_filter: Option<String>,
}

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    let args = Args::parse();
    let config = Config::resolve(args.data_dir, args.log_filter);
    logging::init_tracing(&config.log_filter);

    let app = Mutex::new(App::open(&config));
    let mut navigator = SystemNavigator;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = emit(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")})) {
        error!(error = %e, "stdout closed before ready event");
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                if emit(&mut out, &err).is_err() {
                    break;
                }
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        debug!(method, "rpc request");

        let response = match handle_method(&app, &mut navigator, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        if emit(&mut out, &response).is_err() {
            break;
        }
    }
}
