//! Default paths for studymate components
//!
//! Paths are user-writable by default (no root required):
//! - Config: `$XDG_CONFIG_HOME/studymate/config.toml` or `~/.config/studymate/config.toml`
//! - Data: `$XDG_DATA_HOME/studymate` or `~/.local/share/studymate`

use std::path::PathBuf;

/// Environment variable for overriding the config file path
pub const STUDYMATE_CONFIG_ENV: &str = "STUDYMATE_CONFIG";

/// Environment variable for overriding the data directory
pub const STUDYMATE_DATA_DIR_ENV: &str = "STUDYMATE_DATA_DIR";

/// Application subdirectory name
const APP_DIR: &str = "studymate";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$STUDYMATE_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/studymate/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/studymate/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(STUDYMATE_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    home_dir().join(".config").join(APP_DIR).join(CONFIG_FILENAME)
}

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$STUDYMATE_DATA_DIR` environment variable (if set)
/// 2. `$XDG_DATA_HOME/studymate` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/studymate` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(STUDYMATE_DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    home_dir().join(".local").join("share").join(APP_DIR)
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
