//! Timer state and study record types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use studymate_util::{RecordId, ScheduleId};

use crate::Subject;

/// Current timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Pomodoro phase within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PomodoroPhase {
    Work,
    ShortBreak,
    LongBreak,
}

/// Pomodoro interval configuration, in minutes/count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub sessions_before_long_break: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_before_long_break: 4,
        }
    }
}

impl PomodoroSettings {
    /// Duration of the given phase
    pub fn phase_duration(&self, phase: PomodoroPhase) -> Duration {
        let minutes = match phase {
            PomodoroPhase::Work => self.work_minutes,
            PomodoroPhase::ShortBreak => self.short_break_minutes,
            PomodoroPhase::LongBreak => self.long_break_minutes,
        };
        Duration::from_secs(minutes as u64 * 60)
    }
}

/// Pomodoro state embedded in a timer session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroState {
    pub enabled: bool,
    pub current_phase: PomodoroPhase,
    /// Count of finished work phases; resets on a new session
    pub completed_sessions: u32,
    pub settings: PomodoroSettings,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self {
            enabled: false,
            current_phase: PomodoroPhase::Work,
            completed_sessions: 0,
            settings: PomodoroSettings::default(),
        }
    }
}

/// A completed study session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub id: RecordId,
    pub subject: Subject,
    pub schedule_id: Option<ScheduleId>,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub duration_seconds: u64,
    pub note: Option<String>,
    pub created_at: DateTime<Local>,
    pub is_pomodoro: bool,
    /// Completed work phases, present only for pomodoro sessions
    pub pomodoro_sessions: Option<u32>,
}

/// Per-subject total within a day summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectTotal {
    pub subject: Subject,
    pub seconds: u64,
}

/// Aggregate of one day's study records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub total_seconds: u64,
    pub total_sessions: usize,
    /// Per-subject totals, largest first
    pub subjects: Vec<SubjectTotal>,
}
