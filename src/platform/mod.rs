// OPAC Search platform abstraction
// Provides the per-OS data directory and a way to hand a URL to the default browser.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific data directory for OPAC Search.
///
/// - **Linux**: `~/.local/share/opac-search` (or `$XDG_DATA_HOME/opac-search`)
/// - **macOS**: `~/Library/Application Support/OpacSearch`
/// - **Windows**: `%APPDATA%/OpacSearch`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Asks the desktop to open `url` in the default browser (a new tab in
/// practice). Returns once the opener process has been spawned; whether the
/// page actually loads is not observed.
pub fn open_url(url: &str) -> io::Result<()> {
    #[cfg(target_os = "linux")]
    {
        linux::open_url(url)
    }
    #[cfg(target_os = "macos")]
    {
        macos::open_url(url)
    }
    #[cfg(target_os = "windows")]
    {
        windows::open_url(url)
    }
}

/// Spawns `command` with null stdio and waits for it on a background thread,
/// so the caller never blocks and the exited opener never lingers as a zombie.
fn spawn_detached(command: &mut Command) -> io::Result<()> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    thread::Builder::new()
        .name("opener-reaper".to_string())
        .spawn(move || {
            let _ = child.wait();
        })?;
    Ok(())
}
