//! Weekday and shift-kind enumerations.
//!
//! Both are fixed, totally ordered sets. The declaration order of
//! [`ShiftKind`] doubles as the tie-break order used throughout the
//! assignment engine (Morning before Afternoon before Evening).

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Number of days in the planning week.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of shift kinds per day.
pub const SHIFTS_PER_DAY: usize = 3;

/// A day of the planning week (Monday = 0 .. Sunday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A shift within a day.
///
/// # Tie-break order
/// When several shifts would satisfy a request, the one declared first
/// wins. [`ShiftKind::ALL`] lists them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based ordinal (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Iterates the week in order.
    pub fn iter() -> impl Iterator<Item = Weekday> {
        Self::ALL.into_iter()
    }
}

impl ShiftKind {
    /// All shift kinds in tie-break order.
    pub const ALL: [ShiftKind; SHIFTS_PER_DAY] =
        [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    /// Zero-based ordinal (Morning = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Iterates shift kinds in tie-break order.
    pub fn iter() -> impl Iterator<Item = ShiftKind> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = RosterError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(RosterError::InvalidWeekday(ordinal))
    }
}

impl TryFrom<u8> for ShiftKind {
    type Error = RosterError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(RosterError::InvalidShift(ordinal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_ordinals() {
        for (i, day) in Weekday::iter().enumerate() {
            assert_eq!(day.index(), i);
        }
        assert!(Weekday::Monday < Weekday::Sunday);
    }

    #[test]
    fn test_shift_tie_break_order() {
        let order: Vec<ShiftKind> = ShiftKind::iter().collect();
        assert_eq!(
            order,
            vec![ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening]
        );
        assert!(ShiftKind::Morning < ShiftKind::Evening);
    }

    #[test]
    fn test_try_from_ordinal() {
        assert_eq!(Weekday::try_from(0).unwrap(), Weekday::Monday);
        assert_eq!(Weekday::try_from(6).unwrap(), Weekday::Sunday);
        assert_eq!(ShiftKind::try_from(2).unwrap(), ShiftKind::Evening);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert!(matches!(
            Weekday::try_from(7),
            Err(RosterError::InvalidWeekday(7))
        ));
        assert!(matches!(
            ShiftKind::try_from(3),
            Err(RosterError::InvalidShift(3))
        ));
    }
}
