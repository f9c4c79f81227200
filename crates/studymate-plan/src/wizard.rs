//! Plan wizard step machine

use chrono::NaiveDate;
use std::sync::Arc;
use studymate_api::{
    DAILY_MINUTES_MIN, GoalType, MAX_SELECTED_SUBJECTS, PlanWizardData, PlanWizardDraft,
    SchedulePreviewDay, Subject, TimeSlot,
};
use studymate_store::Store;
use tracing::{debug, warn};

use crate::{allocate_equal, generate_weekly_preview};

/// Number of wizard steps (goal, subjects, time, allocation, done)
pub const WIZARD_STEP_COUNT: u32 = 5;

/// Non-blocking warning that allocations exceed the daily budget.
/// Surfaced to the user; never clamps and never blocks progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationWarning {
    pub allocated_minutes: u32,
    pub budget_minutes: u32,
}

/// The plan creation wizard.
///
/// Owns the draft while it is incomplete and persists it through the store
/// so an interrupted flow can be resumed. Step gating is advisory
/// (`can_proceed`); navigation itself never fails.
pub struct PlanWizard {
    store: Arc<dyn Store>,
    current_step: u32,
    data: PlanWizardData,
}

impl PlanWizard {
    /// Create a fresh wizard
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            current_step: 1,
            data: PlanWizardData::default(),
        }
    }

    /// Create a wizard, resuming a saved draft when one exists
    pub fn restore(store: Arc<dyn Store>) -> Self {
        let draft = match store.load_wizard_draft() {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, "Failed to load wizard draft");
                None
            }
        };

        match draft {
            Some(draft) => {
                debug!(step = draft.current_step, "Wizard draft restored");
                Self {
                    store,
                    current_step: draft.current_step.clamp(1, WIZARD_STEP_COUNT),
                    data: draft.data,
                }
            }
            None => Self::new(store),
        }
    }

    pub fn data(&self) -> &PlanWizardData {
        &self.data
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    // Step navigation

    pub fn go_to_step(&mut self, step: u32) {
        if (1..=WIZARD_STEP_COUNT).contains(&step) {
            self.current_step = step;
            self.save_draft();
        }
    }

    pub fn next_step(&mut self) {
        // Moving past step 3 seeds the allocation table
        if self.current_step == 3 {
            self.auto_distribute();
        }
        if self.current_step < WIZARD_STEP_COUNT {
            self.current_step += 1;
            self.save_draft();
        }
    }

    pub fn prev_step(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
            self.save_draft();
        }
    }

    // Step 1: goal

    pub fn set_goal_type(&mut self, goal_type: GoalType) {
        self.data.step1.goal_type = Some(goal_type);
    }

    pub fn set_target_date(&mut self, target_date: impl Into<String>) {
        self.data.step1.target_date = target_date.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.data.step1.title = title.into();
    }

    // Step 2: subjects

    /// Toggle a subject, keeping at most seven selected
    pub fn toggle_subject(&mut self, subject: Subject) {
        let subjects = &mut self.data.step2.selected_subjects;
        if let Some(pos) = subjects.iter().position(|&s| s == subject) {
            subjects.remove(pos);
        } else if subjects.len() < MAX_SELECTED_SUBJECTS {
            subjects.push(subject);
        }
    }

    // Step 3: available time

    pub fn set_daily_study_minutes(&mut self, minutes: u32) {
        self.data.step3.daily_study_minutes = minutes;
    }

    /// Toggle a time slot; at least one slot always stays selected
    pub fn toggle_time_slot(&mut self, slot: TimeSlot) {
        let slots = &mut self.data.step3.available_time_slots;
        if let Some(pos) = slots.iter().position(|&s| s == slot) {
            if slots.len() > 1 {
                slots.remove(pos);
            }
        } else {
            slots.push(slot);
        }
    }

    pub fn set_study_on_weekends(&mut self, value: bool) {
        self.data.step3.study_on_weekends = value;
    }

    // Step 4: allocation

    pub fn set_allocation(&mut self, subject: Subject, minutes: u32) {
        self.data.step4.subject_allocations.insert(subject, minutes);
    }

    /// Seed step 4 by splitting the daily budget equally across the
    /// selected subjects
    pub fn auto_distribute(&mut self) {
        self.data.step4.subject_allocations = allocate_equal(
            &self.data.step2.selected_subjects,
            self.data.step3.daily_study_minutes,
        );
    }

    // Validation

    /// Whether the given step holds enough data to advance
    pub fn can_proceed(&self, step: u32) -> bool {
        match step {
            1 => {
                self.data.step1.goal_type.is_some()
                    && !self.data.step1.target_date.is_empty()
                    && self.data.step1.title.chars().count() >= 2
            }
            2 => {
                let count = self.data.step2.selected_subjects.len();
                (1..=MAX_SELECTED_SUBJECTS).contains(&count)
            }
            3 => {
                self.data.step3.daily_study_minutes >= DAILY_MINUTES_MIN
                    && !self.data.step3.available_time_slots.is_empty()
            }
            4 => !self.data.step4.subject_allocations.is_empty(),
            _ => true,
        }
    }

    /// Surface over-budget allocations, if any
    pub fn allocation_warning(&self) -> Option<AllocationWarning> {
        let allocated: u32 = self.data.step4.subject_allocations.values().sum();
        let budget = self.data.step3.daily_study_minutes;
        (allocated > budget).then_some(AllocationWarning {
            allocated_minutes: allocated,
            budget_minutes: budget,
        })
    }

    // Preview

    pub fn preview(&self, today: NaiveDate) -> Vec<SchedulePreviewDay> {
        generate_weekly_preview(&self.data, today)
    }

    // Draft persistence

    /// Persist the draft; failures degrade resumability only
    pub fn save_draft(&self) {
        let draft = PlanWizardDraft {
            current_step: self.current_step,
            data: self.data.clone(),
        };
        if let Err(e) = self.store.save_wizard_draft(&draft) {
            warn!(error = %e, "Failed to save wizard draft");
        }
    }

    /// Discard the draft and start over
    pub fn reset(&mut self) {
        self.current_step = 1;
        self.data = PlanWizardData::default();
        if let Err(e) = self.store.clear_wizard_draft() {
            debug!(error = %e, "Failed to clear wizard draft");
        }
    }
}
