//! Shift assignment engine and roster KPIs.
//!
//! # Algorithm
//!
//! `ShiftScheduler` runs three phases per invocation: reset, preferred
//! assignment with conflict resolution, and randomized minimum-staffing
//! backfill. It is greedy and order-dependent by construction; it does
//! not search for a globally best roster.
//!
//! # KPI
//!
//! `RosterKpi` summarizes a scheduled roster: staffed, full and
//! understaffed cells, total assignments and preference honor rate.

mod engine;
mod kpi;

pub use engine::{ScheduleReport, ShiftScheduler};
pub use kpi::{CellStatus, RosterKpi};
