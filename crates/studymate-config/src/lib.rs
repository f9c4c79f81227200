//! Settings parsing and validation for studymate
//!
//! Supports TOML settings with:
//! - Versioned schema
//! - Pomodoro interval configuration
//! - Timer engine tuning (snapshot staleness, autosave cadence)
//! - Plan wizard defaults
//! - Validation with clear error messages

mod schema;
mod settings;
mod validation;

pub use schema::*;
pub use settings::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;

/// Settings errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate settings from a TOML file
pub fn load_settings(path: impl AsRef<Path>) -> ConfigResult<Settings> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Parse and validate settings from a TOML string
pub fn parse_settings(content: &str) -> ConfigResult<Settings> {
    let raw: RawSettings = toml::from_str(content)?;

    // Check version
    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    // Validate
    let errors = validate_settings(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(Settings::from_raw(raw))
}

/// Current supported settings version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_settings() {
        let settings = parse_settings("config_version = 1").unwrap();
        assert_eq!(settings.pomodoro.work_minutes, 25);
        assert_eq!(settings.plan.daily_study_minutes, 180);
    }

    #[test]
    fn reject_wrong_version() {
        let result = parse_settings("config_version = 99");
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(99))));
    }

    #[test]
    fn reject_invalid_values() {
        let result = parse_settings(
            "config_version = 1\n[pomodoro]\nsessions_before_long_break = 0",
        );
        assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "config_version = 1\n[plan]\ndefault_daily_minutes = 240\n")
            .unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.plan.daily_study_minutes, 240);
    }
}
