//! Daily study summaries

use std::collections::BTreeMap;
use studymate_api::{StudyRecord, Subject, SubjectTotal, TodaySummary};

/// Aggregate a day's records into totals and a per-subject breakdown,
/// largest subject first.
pub fn summarize_day(records: &[StudyRecord]) -> TodaySummary {
    let total_seconds = records.iter().map(|r| r.duration_seconds).sum();

    let mut by_subject: BTreeMap<Subject, u64> = BTreeMap::new();
    for record in records {
        *by_subject.entry(record.subject).or_insert(0) += record.duration_seconds;
    }

    let mut subjects: Vec<SubjectTotal> = by_subject
        .into_iter()
        .map(|(subject, seconds)| SubjectTotal { subject, seconds })
        .collect();
    subjects.sort_by(|a, b| b.seconds.cmp(&a.seconds));

    TodaySummary {
        total_seconds,
        total_sessions: records.len(),
        subjects,
    }
}
