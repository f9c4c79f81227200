//! Time allocation algorithms
//!
//! All allocators preserve the exact-sum invariant: the allocated minutes
//! add up to the requested total, for any non-empty input.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use studymate_api::{Subject, TimeSlot};

/// Split `total_minutes` equally across `subjects`. The remainder is handed
/// out one minute at a time from the front of the list.
pub fn allocate_equal(subjects: &[Subject], total_minutes: u32) -> BTreeMap<Subject, u32> {
    if subjects.is_empty() {
        return BTreeMap::new();
    }

    let n = subjects.len() as u32;
    let base = total_minutes / n;
    let remainder = (total_minutes % n) as usize;

    subjects
        .iter()
        .enumerate()
        .map(|(index, &subject)| (subject, base + if index < remainder { 1 } else { 0 }))
        .collect()
}

/// Split `total_minutes` by priority: the first subject gets weight `n`, the
/// last weight `1`, normalized by the triangular sum. Rounding drift is
/// folded into the first subject.
pub fn allocate_priority(subjects: &[Subject], total_minutes: u32) -> BTreeMap<Subject, u32> {
    if subjects.is_empty() {
        return BTreeMap::new();
    }

    let n = subjects.len() as u32;
    let total_weight = n * (n + 1) / 2;

    let mut allocation: BTreeMap<Subject, u32> = subjects
        .iter()
        .enumerate()
        .map(|(index, &subject)| {
            let weight = n - index as u32;
            let share =
                (total_minutes as f64 * weight as f64 / total_weight as f64).round() as u32;
            (subject, share)
        })
        .collect();

    let allocated: i64 = allocation.values().map(|&v| v as i64).sum();
    let diff = total_minutes as i64 - allocated;
    if diff != 0
        && let Some(first) = allocation.get_mut(&subjects[0])
    {
        *first = (*first as i64 + diff).max(0) as u32;
    }

    allocation
}

/// Split `total_minutes` across time-of-day slots, remainder to the front
pub fn distribute_time_slots(slots: &[TimeSlot], total_minutes: u32) -> Vec<(TimeSlot, u32)> {
    if slots.is_empty() {
        return Vec::new();
    }

    let n = slots.len() as u32;
    let base = total_minutes / n;
    let remainder = (total_minutes % n) as usize;

    slots
        .iter()
        .enumerate()
        .map(|(index, &slot)| (slot, base + if index < remainder { 1 } else { 0 }))
        .collect()
}

/// Total study minutes between two dates (inclusive), honoring the
/// weekend preference
pub fn total_study_minutes(
    start: NaiveDate,
    end: NaiveDate,
    daily_minutes: u32,
    study_on_weekends: bool,
) -> u32 {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| study_on_weekends || !is_weekend(*day))
        .map(|_| daily_minutes)
        .sum()
}

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}
