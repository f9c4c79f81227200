//! Strongly-typed identifiers for studymate

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a completed study record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a schedule entry owned by the calendar collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ScheduleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ScheduleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_id_equality() {
        let id1 = ScheduleId::new("sched-1");
        let id2 = ScheduleId::new("sched-1");
        let id3 = ScheduleId::new("sched-2");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn record_id_uniqueness() {
        let r1 = RecordId::new();
        let r2 = RecordId::new();
        assert_ne!(r1, r2);
    }

    #[test]
    fn ids_serialize_deserialize() {
        let schedule_id = ScheduleId::new("test-schedule");
        let json = serde_json::to_string(&schedule_id).unwrap();
        let parsed: ScheduleId = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule_id, parsed);

        let record_id = RecordId::new();
        let json = serde_json::to_string(&record_id).unwrap();
        let parsed: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(record_id, parsed);
    }
}
