//! Weekly schedule preview generation

use chrono::NaiveDate;
use studymate_api::{PlanWizardData, PreviewSession, SchedulePreviewDay};
use studymate_util::WallClock;

use crate::allocation::{distribute_time_slots, is_weekend};

/// Minimum length of a synthesized session, in minutes
const SESSION_MIN_MINUTES: u32 = 30;

/// Maximum length of a synthesized session, in minutes
const SESSION_MAX_MINUTES: u32 = 90;

/// Fallback allocation for subjects without an entry in step 4
const DEFAULT_ALLOCATION_MINUTES: u32 = 30;

/// Generate a 7-day schedule preview starting at `today`.
///
/// The preview is an approximation for display, not a scheduling guarantee:
/// each day splits the daily budget across the selected time slots, then
/// carves each slot into sessions by walking the subject list cyclically.
/// Session length is the subject's allocation clamped to 30..=90 minutes,
/// capped by what remains in the slot.
///
/// Returns an empty preview until a target date and at least one subject
/// are chosen.
pub fn generate_weekly_preview(
    data: &PlanWizardData,
    today: NaiveDate,
) -> Vec<SchedulePreviewDay> {
    let subjects = &data.step2.selected_subjects;
    if data.step1.target_date.is_empty() || subjects.is_empty() {
        return Vec::new();
    }

    (0..7)
        .map(|offset| {
            let date = today + chrono::Duration::days(offset);

            if !data.step3.study_on_weekends && is_weekend(date) {
                return SchedulePreviewDay {
                    date,
                    sessions: Vec::new(),
                    total_minutes: 0,
                };
            }

            let mut sessions = Vec::new();
            let mut subject_index = 0usize;

            let slot_split = distribute_time_slots(
                &data.step3.available_time_slots,
                data.step3.daily_study_minutes,
            );

            for (slot, minutes) in slot_split {
                if minutes == 0 {
                    continue;
                }

                let mut remaining = minutes;
                let mut cursor = slot.start_hour() * 60;

                while remaining > 0 {
                    let subject = subjects[subject_index % subjects.len()];
                    let allocation = data
                        .step4
                        .subject_allocations
                        .get(&subject)
                        .copied()
                        .unwrap_or(DEFAULT_ALLOCATION_MINUTES);

                    let duration =
                        remaining.min(allocation.clamp(SESSION_MIN_MINUTES, SESSION_MAX_MINUTES));

                    sessions.push(PreviewSession {
                        subject,
                        start: WallClock::from_minute_of_day(cursor),
                        end: WallClock::from_minute_of_day(cursor + duration),
                        duration_minutes: duration,
                    });

                    cursor += duration;
                    remaining -= duration;
                    subject_index += 1;
                }
            }

            let total_minutes = sessions.iter().map(|s| s.duration_minutes).sum();

            SchedulePreviewDay {
                date,
                sessions,
                total_minutes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studymate_api::{GoalType, Subject, TimeSlot};

    fn wizard_data(subjects: &[Subject], slots: &[TimeSlot], daily_minutes: u32) -> PlanWizardData {
        let mut data = PlanWizardData::default();
        data.step1.goal_type = Some(GoalType::Midterm);
        data.step1.target_date = "2026-04-20".into();
        data.step1.title = "중간고사 대비".into();
        data.step2.selected_subjects = subjects.to_vec();
        data.step3.daily_study_minutes = daily_minutes;
        data.step3.available_time_slots = slots.to_vec();
        data
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn preview_empty_without_target_or_subjects() {
        let mut data = wizard_data(&[Subject::Math], &[TimeSlot::Afternoon], 180);
        data.step1.target_date.clear();
        assert!(generate_weekly_preview(&data, monday()).is_empty());

        let data = wizard_data(&[], &[TimeSlot::Afternoon], 180);
        assert!(generate_weekly_preview(&data, monday()).is_empty());
    }

    #[test]
    fn preview_spans_seven_days() {
        let data = wizard_data(&[Subject::Math], &[TimeSlot::Afternoon], 180);
        let preview = generate_weekly_preview(&data, monday());

        assert_eq!(preview.len(), 7);
        assert_eq!(preview[0].date, monday());
        assert_eq!(preview[6].date, monday() + chrono::Duration::days(6));
    }

    #[test]
    fn preview_skips_weekends_when_asked() {
        let mut data = wizard_data(&[Subject::Math], &[TimeSlot::Afternoon], 180);
        data.step3.study_on_weekends = false;

        let preview = generate_weekly_preview(&data, monday());

        // 2026-03-07/08 are Saturday and Sunday
        for day in &preview {
            if is_weekend(day.date) {
                assert!(day.sessions.is_empty());
                assert_eq!(day.total_minutes, 0);
            } else {
                assert!(!day.sessions.is_empty());
            }
        }
        assert_eq!(preview.iter().filter(|d| d.sessions.is_empty()).count(), 2);
    }

    #[test]
    fn sessions_walk_subjects_cyclically_with_times() {
        let data = wizard_data(
            &[Subject::Korean, Subject::Math],
            &[TimeSlot::Afternoon],
            180,
        );
        // Default allocation of 30 minutes applies to both subjects
        let preview = generate_weekly_preview(&data, monday());
        let day = &preview[0];

        assert_eq!(day.total_minutes, 180);
        assert_eq!(day.sessions.len(), 6);
        assert_eq!(day.sessions[0].subject, Subject::Korean);
        assert_eq!(day.sessions[1].subject, Subject::Math);
        assert_eq!(day.sessions[2].subject, Subject::Korean);

        // Afternoon opens at 12:00; sessions pack back to back
        assert_eq!(day.sessions[0].start, WallClock::new(12, 0).unwrap());
        assert_eq!(day.sessions[0].end, WallClock::new(12, 30).unwrap());
        assert_eq!(day.sessions[1].start, WallClock::new(12, 30).unwrap());
        assert_eq!(day.sessions[5].end, WallClock::new(15, 0).unwrap());
    }

    #[test]
    fn tiny_allocation_still_yields_thirty_minute_sessions() {
        let mut data = wizard_data(&[Subject::English], &[TimeSlot::Morning], 100);
        data.step4.subject_allocations.insert(Subject::English, 10);

        let preview = generate_weekly_preview(&data, monday());
        let day = &preview[0];

        // 100 minutes -> 30 + 30 + 30 + final 10-minute remainder
        assert_eq!(day.sessions.len(), 4);
        assert_eq!(day.sessions[0].duration_minutes, 30);
        assert_eq!(day.sessions[3].duration_minutes, 10);
        assert_eq!(day.total_minutes, 100);
    }

    #[test]
    fn large_allocation_is_split_into_ninety_minute_sessions() {
        let mut data = wizard_data(&[Subject::Math], &[TimeSlot::Evening], 200);
        data.step4.subject_allocations.insert(Subject::Math, 200);

        let preview = generate_weekly_preview(&data, monday());
        let day = &preview[0];

        assert_eq!(day.sessions.len(), 3);
        assert_eq!(day.sessions[0].duration_minutes, 90);
        assert_eq!(day.sessions[1].duration_minutes, 90);
        assert_eq!(day.sessions[2].duration_minutes, 20);
        assert!(day.sessions.iter().all(|s| s.duration_minutes <= 90));
    }

    #[test]
    fn cursor_wraps_past_midnight() {
        let mut data = wizard_data(&[Subject::Other], &[TimeSlot::Evening], 420);
        data.step4.subject_allocations.insert(Subject::Other, 90);

        let preview = generate_weekly_preview(&data, monday());
        let last = preview[0].sessions.last().unwrap();

        // Evening opens at 18:00; 420 minutes later is 01:00 the next day
        assert_eq!(last.end, WallClock::new(1, 0).unwrap());
    }

    #[test]
    fn budget_splits_across_multiple_slots() {
        let data = wizard_data(
            &[Subject::Korean, Subject::Science],
            &[TimeSlot::Morning, TimeSlot::Evening],
            181,
        );
        let preview = generate_weekly_preview(&data, monday());
        let day = &preview[0];

        // 181 splits 91/90; the first slot gets the extra minute
        let morning_total: u32 = day
            .sessions
            .iter()
            .filter(|s| s.start < WallClock::new(18, 0).unwrap())
            .map(|s| s.duration_minutes)
            .sum();
        assert_eq!(morning_total, 91);
        assert_eq!(day.total_minutes, 181);
    }
}
