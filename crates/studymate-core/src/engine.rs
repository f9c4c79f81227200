//! Timer engine state machine

use chrono::{DateTime, Local, NaiveDate};
use std::sync::Arc;
use std::time::Duration;
use studymate_api::{PomodoroPhase, PomodoroState, StudyRecord, Subject, TimerStatus, TodaySummary};
use studymate_config::Settings;
use studymate_store::{Store, TimerSnapshot};
use studymate_util::{MonotonicInstant, RecordId, ScheduleId};
use tracing::{debug, info, warn};

use crate::{Notifier, TimerEvent, summarize_day};

/// The study timer engine.
///
/// Owns exactly one session at a time. All operations are total: calls that
/// are invalid for the current status are silent no-ops, and persistence
/// failures never escape — losing a snapshot degrades resumability but must
/// not disturb an in-progress session.
///
/// Elapsed time is derived from monotonic wall-clock deltas against a
/// re-anchorable reference, not from tick counts, so a deferred or coalesced
/// tick reconciles the full gap in one jump.
pub struct TimerEngine {
    settings: Settings,
    store: Arc<dyn Store>,
    notifier: Arc<dyn Notifier>,

    status: TimerStatus,
    elapsed: Duration,
    subject: Option<Subject>,
    schedule_id: Option<ScheduleId>,
    session_start: Option<DateTime<Local>>,
    note: String,
    pomodoro: PomodoroState,

    /// Monotonic reference for the currently running stretch.
    /// None while idle/paused/completed and after a restore.
    anchor: Option<MonotonicInstant>,

    /// Elapsed seconds at the last snapshot write, for autosave pacing
    last_saved_secs: u64,
}

impl TimerEngine {
    /// Create a new timer engine
    pub fn new(settings: Settings, store: Arc<dyn Store>, notifier: Arc<dyn Notifier>) -> Self {
        info!(
            work_minutes = settings.pomodoro.work_minutes,
            autosave_secs = settings.timer.autosave_interval.as_secs(),
            "Timer engine initialized"
        );

        let pomodoro = PomodoroState {
            settings: settings.pomodoro,
            ..PomodoroState::default()
        };

        Self {
            settings,
            store,
            notifier,
            status: TimerStatus::Idle,
            elapsed: Duration::ZERO,
            subject: None,
            schedule_id: None,
            session_start: None,
            note: String::new(),
            pomodoro,
            anchor: None,
            last_saved_secs: 0,
        }
    }

    // Accessors

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }

    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    pub fn schedule_id(&self) -> Option<&ScheduleId> {
        self.schedule_id.as_ref()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn pomodoro(&self) -> &PomodoroState {
        &self.pomodoro
    }

    /// Whether a session is in progress (running or paused)
    pub fn is_active(&self) -> bool {
        matches!(self.status, TimerStatus::Running | TimerStatus::Paused)
    }

    /// Seconds left in the current pomodoro phase, 0 when pomodoro is off
    pub fn phase_remaining_seconds(&self) -> u64 {
        if !self.pomodoro.enabled {
            return 0;
        }
        let total = self
            .pomodoro
            .settings
            .phase_duration(self.pomodoro.current_phase)
            .as_secs();
        total.saturating_sub(self.elapsed.as_secs())
    }

    // Timer control

    /// Start a new session. No-op unless idle.
    pub fn start(
        &mut self,
        subject: Subject,
        schedule_id: Option<ScheduleId>,
        now: DateTime<Local>,
        now_mono: MonotonicInstant,
    ) -> Option<TimerEvent> {
        if self.status != TimerStatus::Idle {
            debug!(status = ?self.status, "Start ignored: session already active");
            return None;
        }

        self.status = TimerStatus::Running;
        self.elapsed = Duration::ZERO;
        self.subject = Some(subject);
        self.schedule_id = schedule_id;
        self.session_start = Some(now);
        self.note.clear();
        self.pomodoro.current_phase = PomodoroPhase::Work;
        self.pomodoro.completed_sessions = 0;
        self.anchor = Some(now_mono);
        self.last_saved_secs = 0;

        self.save_to_storage(now);

        info!(subject = %subject, pomodoro = self.pomodoro.enabled, "Study session started");

        Some(TimerEvent::SessionStarted {
            subject,
            started_at: now,
        })
    }

    /// Pause the running session. Paused time is excluded from elapsed time.
    pub fn pause(&mut self, now: DateTime<Local>, now_mono: MonotonicInstant) {
        if self.status != TimerStatus::Running {
            return;
        }

        self.fold_elapsed(now_mono);
        self.anchor = None;
        self.status = TimerStatus::Paused;
        self.save_to_storage(now);

        debug!(elapsed_secs = self.elapsed.as_secs(), "Session paused");
    }

    /// Resume a paused session, re-anchoring the wall-clock reference so the
    /// pause interval does not count.
    pub fn resume(&mut self, now: DateTime<Local>, now_mono: MonotonicInstant) {
        if self.status != TimerStatus::Paused {
            return;
        }

        self.anchor = Some(now_mono);
        self.status = TimerStatus::Running;
        self.save_to_storage(now);

        debug!(elapsed_secs = self.elapsed.as_secs(), "Session resumed");
    }

    /// Stop the session, keeping elapsed time for `complete_session`
    pub fn stop(&mut self, now: DateTime<Local>, now_mono: MonotonicInstant) {
        if !self.is_active() {
            return;
        }

        if self.status == TimerStatus::Running {
            self.fold_elapsed(now_mono);
            self.anchor = None;
        }
        self.status = TimerStatus::Completed;
        self.save_to_storage(now);

        info!(elapsed_secs = self.elapsed.as_secs(), "Session stopped");
    }

    /// Return to idle, clearing the session and any persisted snapshot.
    /// Callable from any state.
    pub fn reset(&mut self) {
        self.status = TimerStatus::Idle;
        self.elapsed = Duration::ZERO;
        self.subject = None;
        self.schedule_id = None;
        self.session_start = None;
        self.note.clear();
        self.pomodoro.current_phase = PomodoroPhase::Work;
        self.pomodoro.completed_sessions = 0;
        self.anchor = None;
        self.last_saved_secs = 0;

        if let Err(e) = self.store.clear_snapshot() {
            debug!(error = %e, "Failed to clear timer snapshot");
        }
    }

    /// Advance elapsed time by the wall-clock delta since the last anchor.
    /// No-op unless running.
    pub fn tick(&mut self, now: DateTime<Local>, now_mono: MonotonicInstant) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        if self.status != TimerStatus::Running {
            return events;
        }

        let Some(anchor) = self.anchor else {
            self.anchor = Some(now_mono);
            return events;
        };
        self.elapsed += now_mono.saturating_duration_since(anchor);
        self.anchor = Some(now_mono);

        if self.pomodoro.enabled {
            let phase_len = self
                .pomodoro
                .settings
                .phase_duration(self.pomodoro.current_phase);
            if !phase_len.is_zero() && self.elapsed >= phase_len {
                events.push(self.advance_phase(now));
            }
        }

        let elapsed_secs = self.elapsed.as_secs();
        if elapsed_secs.saturating_sub(self.last_saved_secs)
            >= self.settings.timer.autosave_interval.as_secs()
        {
            self.last_saved_secs = elapsed_secs;
            self.save_to_storage(now);
        }

        events
    }

    // Pomodoro

    /// Flip pomodoro mode. No effect on elapsed time or running status.
    pub fn toggle_pomodoro(&mut self, now: DateTime<Local>) {
        self.pomodoro.enabled = !self.pomodoro.enabled;
        self.save_to_storage(now);

        debug!(enabled = self.pomodoro.enabled, "Pomodoro toggled");
    }

    fn advance_phase(&mut self, now: DateTime<Local>) -> TimerEvent {
        let finished = self.pomodoro.current_phase;
        if finished == PomodoroPhase::Work {
            self.pomodoro.completed_sessions += 1;
        }

        let every = self.pomodoro.settings.sessions_before_long_break.max(1);
        let next = match finished {
            PomodoroPhase::Work => {
                if self.pomodoro.completed_sessions % every == 0 {
                    PomodoroPhase::LongBreak
                } else {
                    PomodoroPhase::ShortBreak
                }
            }
            PomodoroPhase::ShortBreak | PomodoroPhase::LongBreak => PomodoroPhase::Work,
        };

        self.pomodoro.current_phase = next;
        self.elapsed = Duration::ZERO;
        self.last_saved_secs = 0;

        let message = match next {
            PomodoroPhase::Work => "휴식 끝! 다시 집중할 시간입니다.",
            PomodoroPhase::ShortBreak => "잘했어요! 짧은 휴식을 취하세요.",
            PomodoroPhase::LongBreak => "수고했어요! 긴 휴식을 취하세요.",
        };
        self.notifier.notify("StudyMate", message);

        info!(
            finished = ?finished,
            next = ?next,
            completed_sessions = self.pomodoro.completed_sessions,
            "Pomodoro phase advanced"
        );

        self.save_to_storage(now);

        TimerEvent::PhaseChanged {
            finished,
            next,
            completed_sessions: self.pomodoro.completed_sessions,
        }
    }

    // Session management

    /// Attach a free-text note to the in-progress session
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Fold the current session into a study record, persist it, and return
    /// to idle. Returns None when there is no subject or start time — a
    /// defined no-op, not an error.
    pub fn complete_session(&mut self, now: DateTime<Local>) -> Option<StudyRecord> {
        let subject = self.subject?;
        let start_time = self.session_start?;

        let record = StudyRecord {
            id: RecordId::new(),
            subject,
            schedule_id: self.schedule_id.clone(),
            start_time,
            end_time: now,
            duration_seconds: self.elapsed.as_secs(),
            note: if self.note.is_empty() {
                None
            } else {
                Some(self.note.clone())
            },
            created_at: now,
            is_pomodoro: self.pomodoro.enabled,
            pomodoro_sessions: self
                .pomodoro
                .enabled
                .then_some(self.pomodoro.completed_sessions),
        };

        if let Err(e) = self.store.append_record(&record) {
            warn!(error = %e, "Failed to persist study record");
        }

        info!(
            record_id = %record.id,
            subject = %record.subject,
            duration_secs = record.duration_seconds,
            "Study session completed"
        );

        self.reset();

        Some(record)
    }

    // Persistence

    /// Restore the last persisted snapshot. Stale snapshots are discarded,
    /// and a restored `running` status becomes `paused`: the engine never
    /// silently resumes counting across a restart.
    pub fn restore_from_storage(&mut self, now: DateTime<Local>) {
        let snapshot = match self.store.load_snapshot() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "Failed to load timer snapshot");
                return;
            }
        };

        let max_age = chrono::Duration::from_std(self.settings.timer.snapshot_max_age).unwrap();
        if now.signed_duration_since(snapshot.saved_at) > max_age {
            info!(saved_at = %snapshot.saved_at, "Stale timer snapshot discarded");
            if let Err(e) = self.store.clear_snapshot() {
                debug!(error = %e, "Failed to clear stale snapshot");
            }
            return;
        }

        self.status = if snapshot.status == TimerStatus::Running {
            TimerStatus::Paused
        } else {
            snapshot.status
        };
        self.elapsed = Duration::from_secs(snapshot.elapsed_seconds);
        self.subject = snapshot.subject;
        self.schedule_id = snapshot.schedule_id;
        self.session_start = snapshot.session_start;
        self.note = snapshot.note;
        self.pomodoro = snapshot.pomodoro;
        self.anchor = None;
        self.last_saved_secs = snapshot.elapsed_seconds;

        info!(
            status = ?self.status,
            elapsed_secs = snapshot.elapsed_seconds,
            "Timer state restored"
        );
    }

    /// Persist the current state, or clear the snapshot when idle
    /// (idle sessions are not worth resuming).
    pub fn save_to_storage(&self, now: DateTime<Local>) {
        if self.status == TimerStatus::Idle {
            if let Err(e) = self.store.clear_snapshot() {
                debug!(error = %e, "Failed to clear timer snapshot");
            }
            return;
        }

        let snapshot = TimerSnapshot {
            status: self.status,
            elapsed_seconds: self.elapsed.as_secs(),
            subject: self.subject,
            schedule_id: self.schedule_id.clone(),
            session_start: self.session_start,
            note: self.note.clone(),
            pomodoro: self.pomodoro.clone(),
            saved_at: now,
        };

        if let Err(e) = self.store.save_snapshot(&snapshot) {
            warn!(error = %e, "Failed to save timer snapshot");
        }
    }

    // Today's records

    /// Records completed today, empty when persistence fails
    pub fn today_records(&self, today: NaiveDate) -> Vec<StudyRecord> {
        match self.store.records_for_day(today) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Failed to load today's records");
                Vec::new()
            }
        }
    }

    /// Summary of today's study time
    pub fn today_summary(&self, today: NaiveDate) -> TodaySummary {
        summarize_day(&self.today_records(today))
    }

    fn fold_elapsed(&mut self, now_mono: MonotonicInstant) {
        if let Some(anchor) = self.anchor {
            self.elapsed += now_mono.saturating_duration_since(anchor);
        }
    }
}
