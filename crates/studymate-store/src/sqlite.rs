//! SQLite-based store implementation

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;
use studymate_api::{PlanWizardDraft, StudyRecord};
use tracing::{debug, warn};

use crate::{Store, StoreResult, TimerSnapshot};

/// SQLite-based store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            r#"
            -- Timer snapshot (single row)
            CREATE TABLE IF NOT EXISTS timer_snapshot (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                snapshot_json TEXT NOT NULL
            );

            -- Study record log (append-only)
            CREATE TABLE IF NOT EXISTS study_records (
                id TEXT PRIMARY KEY,
                day TEXT NOT NULL,
                created_at TEXT NOT NULL,
                record_json TEXT NOT NULL
            );

            -- Plan wizard draft (single row)
            CREATE TABLE IF NOT EXISTS wizard_draft (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                draft_json TEXT NOT NULL
            );

            -- Indexes
            CREATE INDEX IF NOT EXISTS idx_records_day ON study_records(day);
            "#,
        )?;

        debug!("Store schema initialized");
        Ok(())
    }
}

impl Store for SqliteStore {
    fn load_snapshot(&self) -> StoreResult<Option<TimerSnapshot>> {
        let conn = self.conn.lock().unwrap();

        let json: Option<String> = conn
            .query_row(
                "SELECT snapshot_json FROM timer_snapshot WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            Some(s) => {
                let snapshot: TimerSnapshot = serde_json::from_str(&s)?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    fn save_snapshot(&self, snapshot: &TimerSnapshot) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let json = serde_json::to_string(snapshot)?;

        conn.execute(
            r#"
            INSERT INTO timer_snapshot (id, snapshot_json)
            VALUES (1, ?)
            ON CONFLICT(id)
            DO UPDATE SET snapshot_json = excluded.snapshot_json
            "#,
            [json],
        )?;

        debug!("Timer snapshot saved");
        Ok(())
    }

    fn clear_snapshot(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM timer_snapshot WHERE id = 1", [])?;
        Ok(())
    }

    fn append_record(&self, record: &StudyRecord) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let day = record.created_at.date_naive().format("%Y-%m-%d").to_string();
        let json = serde_json::to_string(record)?;

        conn.execute(
            "INSERT INTO study_records (id, day, created_at, record_json) VALUES (?, ?, ?, ?)",
            params![
                record.id.to_string(),
                day,
                record.created_at.to_rfc3339(),
                json
            ],
        )?;

        debug!(record_id = %record.id, day = %day, "Study record appended");
        Ok(())
    }

    fn records_for_day(&self, day: NaiveDate) -> StoreResult<Vec<StudyRecord>> {
        let conn = self.conn.lock().unwrap();
        let day_str = day.format("%Y-%m-%d").to_string();

        let mut stmt = conn.prepare(
            "SELECT record_json FROM study_records WHERE day = ? ORDER BY created_at ASC",
        )?;

        let rows = stmt.query_map([day_str], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for row in rows {
            let json = row?;
            records.push(serde_json::from_str(&json)?);
        }

        Ok(records)
    }

    fn all_records(&self) -> StoreResult<Vec<StudyRecord>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt =
            conn.prepare("SELECT record_json FROM study_records ORDER BY created_at ASC")?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for row in rows {
            let json = row?;
            records.push(serde_json::from_str(&json)?);
        }

        Ok(records)
    }

    fn save_wizard_draft(&self, draft: &PlanWizardDraft) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let json = serde_json::to_string(draft)?;

        conn.execute(
            r#"
            INSERT INTO wizard_draft (id, draft_json)
            VALUES (1, ?)
            ON CONFLICT(id)
            DO UPDATE SET draft_json = excluded.draft_json
            "#,
            [json],
        )?;

        debug!("Wizard draft saved");
        Ok(())
    }

    fn load_wizard_draft(&self) -> StoreResult<Option<PlanWizardDraft>> {
        let conn = self.conn.lock().unwrap();

        let json: Option<String> = conn
            .query_row(
                "SELECT draft_json FROM wizard_draft WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            Some(s) => {
                let draft: PlanWizardDraft = serde_json::from_str(&s)?;
                Ok(Some(draft))
            }
            None => Ok(None),
        }
    }

    fn clear_wizard_draft(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM wizard_draft WHERE id = 1", [])?;
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        match self.conn.lock() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(_) => {
                warn!("Store lock poisoned");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use studymate_api::{PlanWizardData, PomodoroState, Subject, TimerStatus};
    use studymate_util::RecordId;

    fn make_record(subject: Subject, created_at: chrono::DateTime<Local>) -> StudyRecord {
        StudyRecord {
            id: RecordId::new(),
            subject,
            schedule_id: None,
            start_time: created_at - chrono::Duration::minutes(50),
            end_time: created_at,
            duration_seconds: 3000,
            note: None,
            created_at,
            is_pomodoro: false,
            pomodoro_sessions: None,
        }
    }

    #[test]
    fn test_in_memory_store() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.is_healthy());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let store = SqliteStore::in_memory().unwrap();

        // No snapshot initially
        assert!(store.load_snapshot().unwrap().is_none());

        let snapshot = TimerSnapshot {
            status: TimerStatus::Paused,
            elapsed_seconds: 754,
            subject: Some(Subject::English),
            schedule_id: None,
            session_start: Some(Local::now()),
            note: "단어 암기".into(),
            pomodoro: PomodoroState::default(),
            saved_at: Local::now(),
        };
        store.save_snapshot(&snapshot).unwrap();

        let loaded = store.load_snapshot().unwrap().unwrap();
        assert_eq!(loaded.status, TimerStatus::Paused);
        assert_eq!(loaded.elapsed_seconds, 754);
        assert_eq!(loaded.subject, Some(Subject::English));

        // Overwrite wins
        let mut second = snapshot.clone();
        second.elapsed_seconds = 800;
        store.save_snapshot(&second).unwrap();
        assert_eq!(store.load_snapshot().unwrap().unwrap().elapsed_seconds, 800);

        store.clear_snapshot().unwrap();
        assert!(store.load_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_records_bucketed_by_day() {
        let store = SqliteStore::in_memory().unwrap();

        let monday = Local.with_ymd_and_hms(2026, 3, 2, 20, 0, 0).unwrap();
        let tuesday = Local.with_ymd_and_hms(2026, 3, 3, 20, 0, 0).unwrap();

        store.append_record(&make_record(Subject::Math, monday)).unwrap();
        store.append_record(&make_record(Subject::Korean, monday)).unwrap();
        store.append_record(&make_record(Subject::English, tuesday)).unwrap();

        let monday_records = store.records_for_day(monday.date_naive()).unwrap();
        assert_eq!(monday_records.len(), 2);
        assert_eq!(monday_records[0].subject, Subject::Math);

        // Other days don't leak in
        let wednesday = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert!(store.records_for_day(wednesday).unwrap().is_empty());

        // The all-time log sees everything
        assert_eq!(store.all_records().unwrap().len(), 3);
    }

    #[test]
    fn test_wizard_draft_roundtrip() {
        let store = SqliteStore::in_memory().unwrap();

        assert!(store.load_wizard_draft().unwrap().is_none());

        let mut data = PlanWizardData::default();
        data.step1.title = "중간고사 계획".into();
        data.step2.selected_subjects = vec![Subject::Math, Subject::Science];
        let draft = PlanWizardDraft {
            current_step: 2,
            data,
        };

        store.save_wizard_draft(&draft).unwrap();
        let loaded = store.load_wizard_draft().unwrap().unwrap();
        assert_eq!(loaded, draft);

        store.clear_wizard_draft().unwrap();
        assert!(store.load_wizard_draft().unwrap().is_none());
    }

    #[test]
    fn test_store_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studymate.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            let now = Local::now();
            store.append_record(&make_record(Subject::Social, now)).unwrap();
        }

        // Reopen and read back
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.all_records().unwrap().len(), 1);
    }
}
