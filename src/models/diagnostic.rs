//! Diagnostic events raised during a scheduling run.
//!
//! Diagnostics are warnings, not errors: the run always completes and the
//! resulting roster stays consistent. They are reported in the order the
//! engine encountered them.

use serde::{Deserialize, Serialize};

use super::{PersonId, ShiftKind, Weekday};

/// A non-fatal scheduling outcome worth surfacing to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A stated preference could not be honored and no alternative slot
    /// had room. The slot is left unassigned.
    UnresolvedPreference {
        person: PersonId,
        day: Weekday,
        shift: ShiftKind,
    },
    /// A cell stayed below the staffing minimum after backfill.
    Understaffed {
        day: Weekday,
        shift: ShiftKind,
        /// People still missing to reach the minimum.
        shortfall: usize,
    },
}

impl Diagnostic {
    /// Whether this is an unresolved-preference event.
    pub fn is_unresolved_preference(&self) -> bool {
        matches!(self, Diagnostic::UnresolvedPreference { .. })
    }

    /// Whether this is an understaffing event.
    pub fn is_understaffed(&self) -> bool {
        matches!(self, Diagnostic::Understaffed { .. })
    }

    /// The day the event concerns.
    pub fn day(&self) -> Weekday {
        match *self {
            Diagnostic::UnresolvedPreference { day, .. } | Diagnostic::Understaffed { day, .. } => {
                day
            }
        }
    }

    /// The shift the event concerns.
    pub fn shift(&self) -> ShiftKind {
        match *self {
            Diagnostic::UnresolvedPreference { shift, .. }
            | Diagnostic::Understaffed { shift, .. } => shift,
        }
    }
}

/// Which fallback placed a person whose preferred cell was unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStrategy {
    /// Another shift on the preferred day.
    SameDay,
    /// The preferred shift on another day.
    OtherDaySameShift,
    /// Any shift on another day.
    OtherDay,
}

/// A preference that was honored through conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub person: PersonId,
    pub preferred_day: Weekday,
    pub preferred_shift: ShiftKind,
    pub assigned_day: Weekday,
    pub assigned_shift: ShiftKind,
    pub strategy: ResolutionStrategy,
}
