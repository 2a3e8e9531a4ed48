//! Three-phase shift assignment engine.
//!
//! # Algorithm
//!
//! 1. **Reset**: clear every assignment and empty the grid.
//! 2. **Preferred assignment**: visit people in registration order and
//!    days Monday..Sunday, placing each stated preference directly or,
//!    when its cell is unavailable, through conflict resolution:
//!    - same day, other shifts in tie-break order;
//!    - other days in order, preferred shift first, then the rest.
//! 3. **Minimum-staffing backfill**: for every (day, shift) below the
//!    minimum, shuffle the people still available that day and place
//!    them until the minimum is met or candidates run out.
//!
//! # Complexity
//! O(p * d * s) for phase 2 and O(d * s * p) for phase 3, where p=people,
//! d=days, s=shifts.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::StaffingLimits;
use crate::error::Result;
use crate::models::{
    Diagnostic, PersonId, Resolution, ResolutionStrategy, Roster, ShiftKind, Weekday,
};

/// Outcome of a scheduling run besides the roster itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Warnings in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    /// Preferences honored through conflict resolution, in order.
    pub resolutions: Vec<Resolution>,
}

impl ScheduleReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unresolved-preference events.
    pub fn unresolved_preferences(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.is_unresolved_preference())
    }

    /// Understaffing events.
    pub fn understaffed(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_understaffed())
    }

    /// Whether every cell reached the staffing minimum.
    pub fn is_fully_staffed(&self) -> bool {
        self.understaffed().next().is_none()
    }

    /// Whether the run raised no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Preference-driven shift scheduler.
///
/// Holds only the staffing limits; the people and grid live in the
/// [`Roster`] passed to [`run`](Self::run).
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_roster::models::{Person, Roster, ShiftKind, Weekday};
/// use u_roster::scheduler::ShiftScheduler;
///
/// let mut roster = Roster::new();
/// let ada = roster
///     .add_person(Person::new("Ada").with_preference(Weekday::Monday, ShiftKind::Morning))
///     .unwrap();
///
/// let scheduler = ShiftScheduler::new();
/// let report = scheduler.run(&mut roster, &mut SmallRng::seed_from_u64(7));
///
/// assert_eq!(
///     roster.person(ada).unwrap().assigned_shift(Weekday::Monday),
///     Some(ShiftKind::Morning)
/// );
/// assert!(!report.is_fully_staffed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    limits: StaffingLimits,
}

impl ShiftScheduler {
    /// Creates a scheduler with the standard limits.
    pub fn new() -> Self {
        Self {
            limits: StaffingLimits::default(),
        }
    }

    /// Creates a scheduler with custom limits.
    pub fn with_limits(limits: StaffingLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    /// The limits in effect.
    pub fn limits(&self) -> &StaffingLimits {
        &self.limits
    }

    /// Runs all three phases on `roster`.
    ///
    /// `rng` drives the backfill shuffle; pass a seeded generator for
    /// reproducible runs.
    pub fn run<R: Rng + ?Sized>(&self, roster: &mut Roster, rng: &mut R) -> ScheduleReport {
        info!(persons = roster.len(), "Generating schedule");
        let mut report = ScheduleReport::new();

        self.reset(roster);
        debug!("Reset all schedules");

        self.assign_preferred(roster, &mut report);
        debug!(
            assignments = roster.grid().total_assignments(),
            resolved = report.resolutions.len(),
            "Assigned preferred shifts"
        );

        self.ensure_minimum_staffing(roster, rng, &mut report);
        debug!(
            assignments = roster.grid().total_assignments(),
            "Ensured minimum staffing"
        );

        info!(
            assignments = roster.grid().total_assignments(),
            diagnostics = report.diagnostics.len(),
            "Schedule generated"
        );
        report
    }

    /// Runs all three phases with the thread-local generator.
    pub fn run_with_thread_rng(&self, roster: &mut Roster) -> ScheduleReport {
        self.run(roster, &mut rand::rng())
    }

    /// Phase 1: clears every assignment and empties the grid.
    pub fn reset(&self, roster: &mut Roster) {
        roster.reset();
    }

    /// Phase 2: places stated preferences, resolving conflicts.
    ///
    /// Once a person reaches their weekly cap the remaining days are not
    /// visited, even if earlier days had no preference.
    pub fn assign_preferred(&self, roster: &mut Roster, report: &mut ScheduleReport) {
        let capacity = self.limits.max_per_shift;

        for index in 0..roster.len() {
            let id = PersonId(index);
            for day in Weekday::iter() {
                let Some(person) = roster.person(id) else {
                    break;
                };
                if person.is_at_capacity() {
                    break;
                }
                let Some(shift) = person.preference(day) else {
                    continue;
                };

                if roster.try_assign(id, day, shift, capacity) {
                    continue;
                }

                match self.resolve_conflict(roster, id, day, shift) {
                    Some(resolution) => {
                        debug!(
                            person = %id,
                            preferred_day = ?day,
                            preferred_shift = ?shift,
                            assigned_day = ?resolution.assigned_day,
                            assigned_shift = ?resolution.assigned_shift,
                            strategy = ?resolution.strategy,
                            "Conflict resolved"
                        );
                        report.resolutions.push(resolution);
                    }
                    None => {
                        warn!(
                            person = %id,
                            day = ?day,
                            shift = ?shift,
                            "Could not honor preference, schedule full"
                        );
                        report.diagnostics.push(Diagnostic::UnresolvedPreference {
                            person: id,
                            day,
                            shift,
                        });
                    }
                }
            }
        }
    }

    /// Finds an alternative slot for a preference whose cell was unavailable.
    fn resolve_conflict(
        &self,
        roster: &mut Roster,
        id: PersonId,
        day: Weekday,
        shift: ShiftKind,
    ) -> Option<Resolution> {
        let capacity = self.limits.max_per_shift;
        let resolved = |assigned_day: Weekday,
                        assigned_shift: ShiftKind,
                        strategy: ResolutionStrategy| Resolution {
            person: id,
            preferred_day: day,
            preferred_shift: shift,
            assigned_day,
            assigned_shift,
            strategy,
        };

        for other_shift in ShiftKind::iter().filter(|&s| s != shift) {
            if roster.try_assign(id, day, other_shift, capacity) {
                return Some(resolved(day, other_shift, ResolutionStrategy::SameDay));
            }
        }

        for other_day in Weekday::iter().filter(|&d| d != day) {
            if roster.try_assign(id, other_day, shift, capacity) {
                return Some(resolved(
                    other_day,
                    shift,
                    ResolutionStrategy::OtherDaySameShift,
                ));
            }
            for other_shift in ShiftKind::iter().filter(|&s| s != shift) {
                if roster.try_assign(id, other_day, other_shift, capacity) {
                    return Some(resolved(other_day, other_shift, ResolutionStrategy::OtherDay));
                }
            }
        }

        None
    }

    /// Phase 3: fills cells below the minimum from people still available.
    pub fn ensure_minimum_staffing<R: Rng + ?Sized>(
        &self,
        roster: &mut Roster,
        rng: &mut R,
        report: &mut ScheduleReport,
    ) {
        let capacity = self.limits.max_per_shift;

        for day in Weekday::iter() {
            for shift in ShiftKind::iter() {
                let current = roster.grid().count(day, shift);
                let needed = self.limits.min_per_shift.saturating_sub(current);
                if needed == 0 {
                    continue;
                }

                let mut candidates = roster.available_on(day);
                candidates.shuffle(rng);

                let mut assigned = 0;
                for id in candidates {
                    if assigned >= needed {
                        break;
                    }
                    if roster.try_assign(id, day, shift, capacity) {
                        assigned += 1;
                    }
                }

                if assigned < needed {
                    let shortfall = needed - assigned;
                    warn!(
                        day = ?day,
                        shift = ?shift,
                        shortfall,
                        staffed = current + assigned,
                        minimum = self.limits.min_per_shift,
                        "Understaffed"
                    );
                    report
                        .diagnostics
                        .push(Diagnostic::Understaffed { day, shift, shortfall });
                }
            }
        }
    }
}
