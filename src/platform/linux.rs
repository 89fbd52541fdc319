// OPAC Search platform support for Linux
// Data:    ~/.local/share/opac-search
// Opener:  xdg-open

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Returns the data directory for OPAC Search on Linux.
/// Uses `$XDG_DATA_HOME/opac-search` if set, otherwise `~/.local/share/opac-search`.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_data_home.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join("opac-search"),
        None => {
            let home = home.unwrap_or_else(|| String::from("/tmp"));
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("opac-search")
        }
    }
}

/// Opens `url` with `xdg-open`.
pub fn open_url(url: &str) -> io::Result<()> {
    open_with("xdg-open", url)
}

fn open_with(opener: &str, url: &str) -> io::Result<()> {
    super::spawn_detached(Command::new(opener).arg(url))
}
