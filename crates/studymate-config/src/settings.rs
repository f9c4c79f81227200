//! Validated settings structures

use crate::schema::RawSettings;
use crate::validation::parse_slot;
use std::time::Duration;
use studymate_api::{PomodoroSettings, TimeSlot};

/// Validated settings ready for use by the engines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pomodoro: PomodoroSettings,
    pub timer: TimerTuning,
    pub plan: PlanDefaults,
}

impl Settings {
    /// Convert from raw settings (after validation)
    pub fn from_raw(raw: RawSettings) -> Self {
        let defaults = PomodoroSettings::default();
        let pomodoro = PomodoroSettings {
            work_minutes: raw.pomodoro.work_minutes.unwrap_or(defaults.work_minutes),
            short_break_minutes: raw
                .pomodoro
                .short_break_minutes
                .unwrap_or(defaults.short_break_minutes),
            long_break_minutes: raw
                .pomodoro
                .long_break_minutes
                .unwrap_or(defaults.long_break_minutes),
            sessions_before_long_break: raw
                .pomodoro
                .sessions_before_long_break
                .unwrap_or(defaults.sessions_before_long_break),
        };

        let timer = TimerTuning {
            snapshot_max_age: Duration::from_secs(
                raw.timer.snapshot_max_age_minutes.unwrap_or(60) * 60,
            ),
            autosave_interval: Duration::from_secs(
                raw.timer.autosave_interval_seconds.unwrap_or(10),
            ),
        };

        let plan = PlanDefaults {
            daily_study_minutes: raw.plan.default_daily_minutes.unwrap_or(180),
            time_slots: raw
                .plan
                .default_time_slots
                .map(|slots| slots.iter().filter_map(|s| parse_slot(s)).collect())
                .unwrap_or_else(|| vec![TimeSlot::Afternoon]),
            study_on_weekends: raw.plan.study_on_weekends.unwrap_or(true),
        };

        Self {
            pomodoro,
            timer,
            plan,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro: PomodoroSettings::default(),
            timer: TimerTuning::default(),
            plan: PlanDefaults::default(),
        }
    }
}

/// Timer engine tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTuning {
    /// Snapshots older than this are discarded on restore
    pub snapshot_max_age: Duration,

    /// Minimum elapsed time between snapshot writes while running
    pub autosave_interval: Duration,
}

impl Default for TimerTuning {
    fn default() -> Self {
        Self {
            snapshot_max_age: Duration::from_secs(3600),
            autosave_interval: Duration::from_secs(10),
        }
    }
}

/// Plan wizard defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDefaults {
    pub daily_study_minutes: u32,
    pub time_slots: Vec<TimeSlot>,
    pub study_on_weekends: bool,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            daily_study_minutes: 180,
            time_slots: vec![TimeSlot::Afternoon],
            study_on_weekends: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_fills_defaults() {
        let raw: RawSettings = toml::from_str("config_version = 1").unwrap();
        let settings = Settings::from_raw(raw);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn from_raw_overrides_sections() {
        let raw: RawSettings = toml::from_str(
            r#"
            config_version = 1

            [pomodoro]
            work_minutes = 50

            [timer]
            snapshot_max_age_minutes = 120
            autosave_interval_seconds = 30

            [plan]
            default_time_slots = ["morning", "evening"]
            study_on_weekends = false
            "#,
        )
        .unwrap();

        let settings = Settings::from_raw(raw);
        assert_eq!(settings.pomodoro.work_minutes, 50);
        assert_eq!(settings.pomodoro.short_break_minutes, 5);
        assert_eq!(settings.timer.snapshot_max_age, Duration::from_secs(7200));
        assert_eq!(settings.timer.autosave_interval, Duration::from_secs(30));
        assert_eq!(
            settings.plan.time_slots,
            vec![TimeSlot::Morning, TimeSlot::Evening]
        );
        assert!(!settings.plan.study_on_weekends);
    }
}
