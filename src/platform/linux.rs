// Linx platform paths for Linux
// Config: ~/.config/linx
// Data:   ~/.local/share/linx

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/linx` if set, otherwise `~/.config/linx`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("linx"),
        _ => home_dir().join(".config").join("linx"),
    }
}

/// Uses `$XDG_DATA_HOME/linx` if set, otherwise `~/.local/share/linx`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("linx"),
        _ => home_dir().join(".local").join("share").join("linx"),
    }
}
