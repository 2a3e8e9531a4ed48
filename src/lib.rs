//! Weekly shift rostering.
//!
//! Assigns a roster of people to recurring weekly shifts under per-shift
//! capacity bounds, per-person weekly caps and stated day/shift
//! preferences. Collecting input and rendering the result are left to
//! the caller; this crate works on structured data only.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Weekday`, `ShiftKind`, `Person`,
//!   `Roster`, `RosterGrid`, `Diagnostic`
//! - **`scheduler`**: The three-phase `ShiftScheduler` and `RosterKpi`
//! - **`config`**: `StaffingLimits` and the standard constants
//! - **`validation`**: Input integrity checks (empty or duplicate names, caps)
//! - **`error`**: `RosterError`
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_roster::models::{Person, Roster, ShiftKind, Weekday};
//! use u_roster::scheduler::{RosterKpi, ShiftScheduler};
//!
//! let roster_input = vec![
//!     Person::new("Ada").with_preference(Weekday::Monday, ShiftKind::Morning),
//!     Person::new("Bob").with_preference(Weekday::Monday, ShiftKind::Evening),
//!     Person::new("Cy"),
//! ];
//! let mut roster = Roster::from_persons(roster_input).unwrap();
//!
//! let scheduler = ShiftScheduler::new();
//! let report = scheduler.run(&mut roster, &mut SmallRng::seed_from_u64(1));
//! let kpi = RosterKpi::calculate(&roster, scheduler.limits());
//!
//! assert!(roster.is_consistent());
//! assert_eq!(kpi.preferences_honored, 2);
//! assert_eq!(report.unresolved_preferences().count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, RosterError};
