//! Person model.
//!
//! A person carries stated day/shift preferences and the assignments
//! produced by the most recent scheduling run. Assignments are only ever
//! added one day at a time or cleared all at once.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ShiftKind, Weekday};
use crate::config::MAX_DAYS_PER_WEEK;

/// A person on the roster.
///
/// # Invariants
/// - `days_worked == assignments.len()`
/// - `days_worked <= max_days <= MAX_DAYS_PER_WEEK`
/// - at most one assignment per day (map semantics)
///
/// Deserialized persons always start unassigned; only name, preferences
/// and weekly cap are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name. Uniqueness is case-insensitive within a roster.
    pub name: String,
    /// Preferred shift per day (at most one per day).
    #[serde(default)]
    preferences: BTreeMap<Weekday, ShiftKind>,
    /// Assigned shift per day.
    #[serde(default, skip_deserializing)]
    assignments: BTreeMap<Weekday, ShiftKind>,
    #[serde(default, skip_deserializing)]
    days_worked: u8,
    /// Weekly workload cap.
    #[serde(default = "default_max_days")]
    max_days: u8,
}

fn default_max_days() -> u8 {
    MAX_DAYS_PER_WEEK
}

impl Person {
    /// Creates a person with no preferences and the standard weekly cap.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
            assignments: BTreeMap::new(),
            days_worked: 0,
            max_days: MAX_DAYS_PER_WEEK,
        }
    }

    /// Adds a preference.
    pub fn with_preference(mut self, day: Weekday, shift: ShiftKind) -> Self {
        self.set_preference(day, shift);
        self
    }

    /// Lowers the weekly cap. Values above [`MAX_DAYS_PER_WEEK`] are clamped.
    pub fn with_max_days(mut self, max_days: u8) -> Self {
        self.max_days = max_days.min(MAX_DAYS_PER_WEEK);
        self
    }

    /// Sets the preferred shift for a day, replacing any earlier one.
    pub fn set_preference(&mut self, day: Weekday, shift: ShiftKind) {
        self.preferences.insert(day, shift);
    }

    /// Preferred shift for a day.
    pub fn preference(&self, day: Weekday) -> Option<ShiftKind> {
        self.preferences.get(&day).copied()
    }

    /// All stated preferences, Monday first.
    pub fn preferences(&self) -> &BTreeMap<Weekday, ShiftKind> {
        &self.preferences
    }

    /// Whether the person can take a shift on `day`: no assignment on
    /// that day yet and the weekly cap not reached.
    pub fn can_work_day(&self, day: Weekday) -> bool {
        if self.assignments.contains_key(&day) {
            return false;
        }
        self.days_worked < self.max_days
    }

    /// Records an assignment.
    ///
    /// Returns `false` without mutating anything if
    /// [`can_work_day`](Self::can_work_day) is false.
    pub fn assign_shift(&mut self, day: Weekday, shift: ShiftKind) -> bool {
        if !self.can_work_day(day) {
            return false;
        }
        self.assignments.insert(day, shift);
        self.days_worked += 1;
        true
    }

    /// Clears every assignment. Preferences are kept.
    pub fn reset_schedule(&mut self) {
        self.assignments.clear();
        self.days_worked = 0;
    }

    /// Assigned shift for a day.
    pub fn assigned_shift(&self, day: Weekday) -> Option<ShiftKind> {
        self.assignments.get(&day).copied()
    }

    /// All assignments, Monday first.
    pub fn assignments(&self) -> &BTreeMap<Weekday, ShiftKind> {
        &self.assignments
    }

    /// Number of assigned days.
    #[inline]
    pub fn days_worked(&self) -> u8 {
        self.days_worked
    }

    /// Weekly workload cap.
    #[inline]
    pub fn max_days(&self) -> u8 {
        self.max_days
    }

    /// Whether the weekly cap has been reached.
    #[inline]
    pub fn is_at_capacity(&self) -> bool {
        self.days_worked >= self.max_days
    }

    /// Whether the assigned shift on `day` is the preferred one.
    pub fn has_preference_match(&self, day: Weekday) -> bool {
        match (self.assigned_shift(day), self.preference(day)) {
            (Some(assigned), Some(preferred)) => assigned == preferred,
            _ => false,
        }
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_builder() {
        let p = Person::new("Ada")
            .with_preference(Weekday::Monday, ShiftKind::Morning)
            .with_preference(Weekday::Friday, ShiftKind::Evening);

        assert_eq!(p.name, "Ada");
        assert_eq!(p.preference(Weekday::Monday), Some(ShiftKind::Morning));
        assert_eq!(p.preference(Weekday::Friday), Some(ShiftKind::Evening));
        assert_eq!(p.preference(Weekday::Tuesday), None);
        assert_eq!(p.days_worked(), 0);
        assert_eq!(p.max_days(), MAX_DAYS_PER_WEEK);
    }

    #[test]
    fn test_set_preference_overwrites() {
        let mut p = Person::new("Ada");
        p.set_preference(Weekday::Monday, ShiftKind::Morning);
        p.set_preference(Weekday::Monday, ShiftKind::Evening);
        assert_eq!(p.preference(Weekday::Monday), Some(ShiftKind::Evening));
        assert_eq!(p.preferences().len(), 1);
    }

    #[test]
    fn test_assign_shift() {
        let mut p = Person::new("Ada");
        assert!(p.can_work_day(Weekday::Monday));
        assert!(p.assign_shift(Weekday::Monday, ShiftKind::Afternoon));
        assert_eq!(p.assigned_shift(Weekday::Monday), Some(ShiftKind::Afternoon));
        assert_eq!(p.days_worked(), 1);
    }

    #[test]
    fn test_one_assignment_per_day() {
        let mut p = Person::new("Ada");
        assert!(p.assign_shift(Weekday::Monday, ShiftKind::Morning));
        assert!(!p.can_work_day(Weekday::Monday));
        assert!(!p.assign_shift(Weekday::Monday, ShiftKind::Evening));
        // Rejected call leaves the record untouched
        assert_eq!(p.assigned_shift(Weekday::Monday), Some(ShiftKind::Morning));
        assert_eq!(p.days_worked(), 1);
    }

    #[test]
    fn test_weekly_cap() {
        let mut p = Person::new("Ada");
        for day in Weekday::iter().take(5) {
            assert!(p.assign_shift(day, ShiftKind::Morning));
        }
        assert!(p.is_at_capacity());
        assert!(!p.can_work_day(Weekday::Saturday));
        assert!(!p.assign_shift(Weekday::Saturday, ShiftKind::Morning));
        assert_eq!(p.days_worked(), 5);
        assert_eq!(p.assignments().len(), 5);
    }

    #[test]
    fn test_lowered_cap() {
        let mut p = Person::new("Ada").with_max_days(2);
        assert!(p.assign_shift(Weekday::Monday, ShiftKind::Morning));
        assert!(p.assign_shift(Weekday::Tuesday, ShiftKind::Morning));
        assert!(!p.assign_shift(Weekday::Wednesday, ShiftKind::Morning));
    }

    #[test]
    fn test_cap_clamped() {
        let p = Person::new("Ada").with_max_days(7);
        assert_eq!(p.max_days(), MAX_DAYS_PER_WEEK);
    }

    #[test]
    fn test_reset_keeps_preferences() {
        let mut p = Person::new("Ada").with_preference(Weekday::Sunday, ShiftKind::Evening);
        p.assign_shift(Weekday::Sunday, ShiftKind::Evening);
        p.assign_shift(Weekday::Monday, ShiftKind::Morning);

        p.reset_schedule();
        assert_eq!(p.days_worked(), 0);
        assert!(p.assignments().is_empty());
        assert_eq!(p.preference(Weekday::Sunday), Some(ShiftKind::Evening));
    }

    #[test]
    fn test_preference_match() {
        let mut p = Person::new("Ada")
            .with_preference(Weekday::Monday, ShiftKind::Morning)
            .with_preference(Weekday::Tuesday, ShiftKind::Morning);
        p.assign_shift(Weekday::Monday, ShiftKind::Morning);
        p.assign_shift(Weekday::Tuesday, ShiftKind::Evening);
        p.assign_shift(Weekday::Wednesday, ShiftKind::Evening);

        assert!(p.has_preference_match(Weekday::Monday));
        assert!(!p.has_preference_match(Weekday::Tuesday));
        assert!(!p.has_preference_match(Weekday::Wednesday)); // no preference
        assert!(!p.has_preference_match(Weekday::Thursday)); // no assignment
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        let p = Person::new("Ada Lovelace");
        assert!(p.name_matches("ada lovelace"));
        assert!(p.name_matches("ADA LOVELACE"));
        assert!(p.name_matches(" ada lovelace "));
        assert!(!p.name_matches("Ada"));
    }

    #[test]
    fn test_deserialize_ignores_assignments() {
        let json = r#"{
            "name": "Ada",
            "preferences": {"Monday": "Evening"},
            "assignments": {"Tuesday": "Morning"},
            "days_worked": 3
        }"#;
        let p: Person = serde_json::from_str(json).unwrap();
        assert_eq!(p.preference(Weekday::Monday), Some(ShiftKind::Evening));
        assert!(p.assignments().is_empty());
        assert_eq!(p.days_worked(), 0);
        assert_eq!(p.max_days(), MAX_DAYS_PER_WEEK);
    }
}
