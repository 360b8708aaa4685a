// Tabshell platform paths for macOS
// Config: ~/Library/Application Support/Tabshell
// Data:   ~/Library/Application Support/Tabshell

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Tabshell on macOS.
/// `~/Library/Application Support/Tabshell`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Tabshell")
}

/// Returns the data directory for Tabshell on macOS.
/// `~/Library/Application Support/Tabshell`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Tabshell")
}
