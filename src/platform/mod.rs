// Linx platform abstraction
// Resolves where settings and the category database live on each OS.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Linx.
///
/// - **Linux**: `~/.config/linx` (or `$XDG_CONFIG_HOME/linx`)
/// - **macOS**: `~/Library/Application Support/Linx`
/// - **Windows**: `%APPDATA%/Linx`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory holding the category database.
///
/// - **Linux**: `~/.local/share/linx` (or `$XDG_DATA_HOME/linx`)
/// - **macOS**: `~/Library/Application Support/Linx`
/// - **Windows**: `%LOCALAPPDATA%/Linx`
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
