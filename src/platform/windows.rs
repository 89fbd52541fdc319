// OPAC Search platform support for Windows
// Data:    %APPDATA%/OpacSearch
// Opener:  url.dll FileProtocolHandler (cmd's `start` would split the URL at `&`)

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Returns the data directory for OPAC Search on Windows.
/// `%APPDATA%/OpacSearch`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("OpacSearch")
}

/// Opens `url` through the shell's protocol handler.
pub fn open_url(url: &str) -> io::Result<()> {
    super::spawn_detached(
        Command::new("rundll32")
            .arg("url.dll,FileProtocolHandler")
            .arg(url),
    )
}
