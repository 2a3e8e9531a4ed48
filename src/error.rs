//! Error type for roster construction and configuration.
//!
//! Scheduling itself never fails; shortfalls are reported as
//! [`Diagnostic`](crate::models::Diagnostic)s. Errors cover rejected input
//! only.

use thiserror::Error;

use crate::config::MAX_DAYS_PER_WEEK;
use crate::models::PersonId;
use crate::validation::ValidationError;

/// Errors returned by roster and configuration entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Name is empty after trimming.
    #[error("Person name cannot be empty")]
    EmptyName,

    /// Name matches a registered person, ignoring case.
    #[error("Person '{0}' already exists")]
    DuplicateName(String),

    /// Weekly cap above [`MAX_DAYS_PER_WEEK`].
    #[error(
        "Person '{name}' has a weekly cap of {max_days} days (maximum {})",
        MAX_DAYS_PER_WEEK
    )]
    CapOutOfRange { name: String, max_days: u8 },

    /// Identifier outside the roster.
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),

    /// Weekday ordinal above 6.
    #[error("Invalid weekday ordinal: {0} (expected 0-6)")]
    InvalidWeekday(u8),

    /// Shift ordinal above 2.
    #[error("Invalid shift ordinal: {0} (expected 0-2)")]
    InvalidShift(u8),

    /// Staffing limits rejected by [`StaffingLimits::validate`](crate::config::StaffingLimits::validate).
    #[error("Invalid staffing limits: {0}")]
    InvalidLimits(String),

    /// Every issue found by bulk validation.
    #[error("Roster validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

pub type Result<T> = std::result::Result<T, RosterError>;
