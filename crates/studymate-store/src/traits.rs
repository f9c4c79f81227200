//! Store trait definitions

use chrono::{DateTime, Local, NaiveDate};
use studymate_api::{PlanWizardDraft, PomodoroState, StudyRecord, Subject, TimerStatus};
use studymate_util::ScheduleId;

use crate::StoreResult;

/// Main store trait
pub trait Store: Send + Sync {
    // Timer snapshot

    /// Load the last saved timer snapshot
    fn load_snapshot(&self) -> StoreResult<Option<TimerSnapshot>>;

    /// Save the timer snapshot (single key, last write wins)
    fn save_snapshot(&self, snapshot: &TimerSnapshot) -> StoreResult<()>;

    /// Clear any persisted timer snapshot
    fn clear_snapshot(&self) -> StoreResult<()>;

    // Study records

    /// Append a completed study record to the log
    fn append_record(&self, record: &StudyRecord) -> StoreResult<()>;

    /// Get all records created on a specific day, oldest first
    fn records_for_day(&self, day: NaiveDate) -> StoreResult<Vec<StudyRecord>>;

    /// Get the full record log, oldest first
    fn all_records(&self) -> StoreResult<Vec<StudyRecord>>;

    // Plan wizard draft

    /// Save the in-progress wizard draft (single key, overwritten)
    fn save_wizard_draft(&self, draft: &PlanWizardDraft) -> StoreResult<()>;

    /// Load the saved wizard draft, if any
    fn load_wizard_draft(&self) -> StoreResult<Option<PlanWizardDraft>>;

    /// Clear the saved wizard draft
    fn clear_wizard_draft(&self) -> StoreResult<()>;

    // Health

    /// Check if store is healthy
    fn is_healthy(&self) -> bool;
}

/// Serialized timer engine state for crash/restart recovery
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub elapsed_seconds: u64,
    pub subject: Option<Subject>,
    pub schedule_id: Option<ScheduleId>,
    pub session_start: Option<DateTime<Local>>,
    pub note: String,
    pub pomodoro: PomodoroState,
    /// When this snapshot was written; restore ignores snapshots past the staleness threshold
    pub saved_at: DateTime<Local>,
}
