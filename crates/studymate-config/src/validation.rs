//! Settings validation

use crate::schema::RawSettings;
use studymate_api::{DAILY_MINUTES_MAX, DAILY_MINUTES_MIN, TimeSlot};
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Pomodoro setting '{field}' must be at least 1")]
    ZeroPomodoroValue { field: &'static str },

    #[error("Snapshot max age must be at least 1 minute")]
    ZeroSnapshotMaxAge,

    #[error("Autosave interval must be between 1 and 300 seconds, got {0}")]
    AutosaveOutOfRange(u64),

    #[error(
        "Default daily minutes must be between {min} and {max}, got {0}",
        min = DAILY_MINUTES_MIN,
        max = DAILY_MINUTES_MAX
    )]
    DailyMinutesOutOfRange(u32),

    #[error("Unknown time slot: '{0}' (expected morning, afternoon, evening)")]
    UnknownTimeSlot(String),

    #[error("Default time slot list cannot be empty")]
    EmptyTimeSlots,
}

/// Parse a time-slot name as used in the settings file
pub fn parse_slot(name: &str) -> Option<TimeSlot> {
    match name.to_lowercase().as_str() {
        "morning" => Some(TimeSlot::Morning),
        "afternoon" => Some(TimeSlot::Afternoon),
        "evening" => Some(TimeSlot::Evening),
        _ => None,
    }
}

/// Validate raw settings, collecting all errors
pub fn validate_settings(raw: &RawSettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let pomodoro_fields = [
        ("work_minutes", raw.pomodoro.work_minutes),
        ("short_break_minutes", raw.pomodoro.short_break_minutes),
        ("long_break_minutes", raw.pomodoro.long_break_minutes),
        (
            "sessions_before_long_break",
            raw.pomodoro.sessions_before_long_break,
        ),
    ];
    for (field, value) in pomodoro_fields {
        if value == Some(0) {
            errors.push(ValidationError::ZeroPomodoroValue { field });
        }
    }

    if raw.timer.snapshot_max_age_minutes == Some(0) {
        errors.push(ValidationError::ZeroSnapshotMaxAge);
    }

    if let Some(interval) = raw.timer.autosave_interval_seconds
        && !(1..=300).contains(&interval)
    {
        errors.push(ValidationError::AutosaveOutOfRange(interval));
    }

    if let Some(minutes) = raw.plan.default_daily_minutes
        && !(DAILY_MINUTES_MIN..=DAILY_MINUTES_MAX).contains(&minutes)
    {
        errors.push(ValidationError::DailyMinutesOutOfRange(minutes));
    }

    if let Some(slots) = &raw.plan.default_time_slots {
        if slots.is_empty() {
            errors.push(ValidationError::EmptyTimeSlots);
        }
        for slot in slots {
            if parse_slot(slot).is_none() {
                errors.push(ValidationError::UnknownTimeSlot(slot.clone()));
            }
        }
    }

    errors
}
