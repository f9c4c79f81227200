//! Raw settings schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw settings as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSettings {
    /// Settings schema version
    pub config_version: u32,

    /// Pomodoro interval settings
    #[serde(default)]
    pub pomodoro: RawPomodoro,

    /// Timer engine tuning
    #[serde(default)]
    pub timer: RawTimer,

    /// Plan wizard defaults
    #[serde(default)]
    pub plan: RawPlan,
}

/// Pomodoro interval settings, in minutes/count
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPomodoro {
    pub work_minutes: Option<u32>,
    pub short_break_minutes: Option<u32>,
    pub long_break_minutes: Option<u32>,
    pub sessions_before_long_break: Option<u32>,
}

/// Timer engine tuning
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawTimer {
    /// Snapshots older than this are discarded on restore
    pub snapshot_max_age_minutes: Option<u64>,

    /// Minimum elapsed time between snapshot writes while running
    pub autosave_interval_seconds: Option<u64>,
}

/// Plan wizard defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPlan {
    /// Default daily study budget in minutes
    pub default_daily_minutes: Option<u32>,

    /// Default time slots: "morning", "afternoon", "evening"
    pub default_time_slots: Option<Vec<String>>,

    pub study_on_weekends: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_settings() {
        let toml_str = r#"
            config_version = 1

            [pomodoro]
            work_minutes = 50
            short_break_minutes = 10

            [timer]
            snapshot_max_age_minutes = 120

            [plan]
            default_daily_minutes = 240
            default_time_slots = ["morning", "evening"]
            study_on_weekends = false
        "#;

        let raw: RawSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(raw.config_version, 1);
        assert_eq!(raw.pomodoro.work_minutes, Some(50));
        assert_eq!(raw.pomodoro.long_break_minutes, None);
        assert_eq!(raw.timer.snapshot_max_age_minutes, Some(120));
        assert_eq!(raw.plan.default_daily_minutes, Some(240));
        assert_eq!(
            raw.plan.default_time_slots,
            Some(vec!["morning".to_string(), "evening".to_string()])
        );
    }

    #[test]
    fn parse_minimal_settings() {
        let raw: RawSettings = toml::from_str("config_version = 1").unwrap();
        assert_eq!(raw.config_version, 1);
        assert!(raw.pomodoro.work_minutes.is_none());
        assert!(raw.plan.default_time_slots.is_none());
    }
}
