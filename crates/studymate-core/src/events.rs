//! Events emitted by the timer engine

use chrono::{DateTime, Local};
use studymate_api::{PomodoroPhase, Subject};

/// Events emitted by the timer engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A study session started
    SessionStarted {
        subject: Subject,
        started_at: DateTime<Local>,
    },

    /// A pomodoro phase finished and the next one began
    PhaseChanged {
        finished: PomodoroPhase,
        next: PomodoroPhase,
        completed_sessions: u32,
    },
}
