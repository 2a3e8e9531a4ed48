//! Rostering domain models.
//!
//! Provides the data types for a weekly shift roster: the fixed week and
//! shift enumerations, people with preferences and assignments, the
//! (day, shift) grid, and the diagnostics a scheduling run reports.
//!
//! # Domain Mappings
//!
//! | u-roster | Retail | Healthcare | Hospitality |
//! |----------|--------|------------|-------------|
//! | Person | Sales Associate | Nurse | Front Desk Agent |
//! | ShiftKind | Opening/Mid/Closing | Day/Evening/Night | Breakfast/Lunch/Dinner |
//! | RosterGrid | Weekly Floor Plan | Ward Rota | Staff Board |

mod diagnostic;
mod person;
mod roster;
mod week;

pub use diagnostic::{Diagnostic, Resolution, ResolutionStrategy};
pub use person::Person;
pub use roster::{PersonId, Roster, RosterGrid};
pub use week::{ShiftKind, Weekday, DAYS_PER_WEEK, SHIFTS_PER_DAY};
