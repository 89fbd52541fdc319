// OPAC Search platform support for macOS
// Data:    ~/Library/Application Support/OpacSearch
// Opener:  open

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the data directory for OPAC Search on macOS.
/// `~/Library/Application Support/OpacSearch`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("OpacSearch")
}

/// Opens `url` with `open`.
pub fn open_url(url: &str) -> io::Result<()> {
    super::spawn_detached(Command::new("open").arg(url))
}
