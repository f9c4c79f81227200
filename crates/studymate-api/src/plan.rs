//! Plan wizard data and schedule preview types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use studymate_util::WallClock;

use crate::{GoalType, Subject};

/// Maximum number of subjects selectable in the wizard
pub const MAX_SELECTED_SUBJECTS: usize = 7;

/// Valid daily study budget range, in minutes
pub const DAILY_MINUTES_MIN: u32 = 30;
pub const DAILY_MINUTES_MAX: u32 = 720;

/// A named portion of the day used to spread study sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "오전",
            TimeSlot::Afternoon => "오후",
            TimeSlot::Evening => "저녁",
        }
    }

    /// Hour the slot opens (inclusive)
    pub fn start_hour(&self) -> u32 {
        match self {
            TimeSlot::Morning => 6,
            TimeSlot::Afternoon => 12,
            TimeSlot::Evening => 18,
        }
    }

    /// Hour the slot closes (exclusive)
    pub fn end_hour(&self) -> u32 {
        match self {
            TimeSlot::Morning => 12,
            TimeSlot::Afternoon => 18,
            TimeSlot::Evening => 24,
        }
    }
}

/// Wizard step 1: goal selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step1Data {
    pub goal_type: Option<GoalType>,
    /// Target date as entered, `YYYY-MM-DD`; empty until chosen
    pub target_date: String,
    pub title: String,
}

/// Wizard step 2: subject selection, in priority order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step2Data {
    pub selected_subjects: Vec<Subject>,
}

/// Wizard step 3: available time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step3Data {
    pub daily_study_minutes: u32,
    pub available_time_slots: Vec<TimeSlot>,
    pub study_on_weekends: bool,
}

impl Default for Step3Data {
    fn default() -> Self {
        Self {
            daily_study_minutes: 180,
            available_time_slots: vec![TimeSlot::Afternoon],
            study_on_weekends: true,
        }
    }
}

/// Wizard step 4: per-subject minute allocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step4Data {
    pub subject_allocations: BTreeMap<Subject, u32>,
}

/// The full wizard draft, mutated step by step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWizardData {
    pub step1: Step1Data,
    pub step2: Step2Data,
    pub step3: Step3Data,
    pub step4: Step4Data,
}

/// Persisted draft: the wizard data plus the step the user was on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWizardDraft {
    pub current_step: u32,
    pub data: PlanWizardData,
}

/// One synthesized session within a preview day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSession {
    pub subject: Subject,
    pub start: WallClock,
    pub end: WallClock,
    pub duration_minutes: u32,
}

/// One day of the weekly schedule preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePreviewDay {
    pub date: NaiveDate,
    pub sessions: Vec<PreviewSession>,
    pub total_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_defaults_match_seed_values() {
        let data = PlanWizardData::default();
        assert_eq!(data.step1.goal_type, None);
        assert!(data.step2.selected_subjects.is_empty());
        assert_eq!(data.step3.daily_study_minutes, 180);
        assert_eq!(data.step3.available_time_slots, vec![TimeSlot::Afternoon]);
        assert!(data.step3.study_on_weekends);
        assert!(data.step4.subject_allocations.is_empty());
    }

    #[test]
    fn time_slot_hours() {
        assert_eq!(TimeSlot::Morning.start_hour(), 6);
        assert_eq!(TimeSlot::Morning.end_hour(), 12);
        assert_eq!(TimeSlot::Evening.end_hour(), 24);
    }

    #[test]
    fn draft_round_trips_through_json() {
        let mut data = PlanWizardData::default();
        data.step1.goal_type = Some(GoalType::Final);
        data.step1.target_date = "2026-10-12".into();
        data.step1.title = "기말 대비".into();
        data.step2.selected_subjects = vec![Subject::Math, Subject::English];
        data.step4.subject_allocations.insert(Subject::Math, 90);

        let draft = PlanWizardDraft {
            current_step: 4,
            data,
        };

        let json = serde_json::to_string(&draft).unwrap();
        let parsed: PlanWizardDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, parsed);
    }
}
