//! Roster quality metrics (KPIs).
//!
//! Computes staffing and preference indicators from a scheduled roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Staffed cells | Cells with at least the minimum |
//! | Full cells | Cells at capacity |
//! | Understaffed cells | Cells below the minimum |
//! | Total assignments | Sum of cell sizes |
//! | Preference honor rate | Honored / stated preferences |

use serde::{Deserialize, Serialize};

use crate::config::StaffingLimits;
use crate::models::{Roster, ShiftKind, Weekday, DAYS_PER_WEEK, SHIFTS_PER_DAY};

/// Staffing level of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    /// Below the minimum.
    Understaffed,
    /// At or above the minimum, below capacity.
    Staffed,
    /// At capacity.
    Full,
}

impl CellStatus {
    /// Classifies a cell size against the limits.
    pub fn classify(count: usize, limits: &StaffingLimits) -> Self {
        if count < limits.min_per_shift {
            CellStatus::Understaffed
        } else if count >= limits.max_per_shift {
            CellStatus::Full
        } else {
            CellStatus::Staffed
        }
    }
}

/// Roster performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterKpi {
    /// Number of (day, shift) cells.
    pub total_cells: usize,
    /// Cells meeting the minimum (full cells included).
    pub staffed_cells: usize,
    /// Cells at capacity.
    pub full_cells: usize,
    /// Cells below the minimum.
    pub understaffed_cells: usize,
    /// Sum of all cell sizes.
    pub total_assignments: usize,
    /// Preferences stated across all people.
    pub preferences_stated: usize,
    /// Preferences whose day was assigned the preferred shift.
    pub preferences_honored: usize,
    /// Honored / stated (1.0 when nothing was stated).
    pub preference_honor_rate: f64,
    /// Days worked per person, in registration order.
    pub days_worked: Vec<u8>,
    /// Status per cell, in (day, shift) order.
    pub cell_status: Vec<(Weekday, ShiftKind, CellStatus)>,
}

impl RosterKpi {
    /// Computes KPIs from a scheduled roster.
    ///
    /// # Arguments
    /// * `roster` - The roster after a scheduling run.
    /// * `limits` - The limits the run used.
    pub fn calculate(roster: &Roster, limits: &StaffingLimits) -> Self {
        let mut staffed_cells = 0;
        let mut full_cells = 0;
        let mut understaffed_cells = 0;
        let mut cell_status = Vec::with_capacity(DAYS_PER_WEEK * SHIFTS_PER_DAY);

        for (day, shift, cell) in roster.grid().iter() {
            let status = CellStatus::classify(cell.len(), limits);
            match status {
                CellStatus::Understaffed => understaffed_cells += 1,
                CellStatus::Staffed => staffed_cells += 1,
                CellStatus::Full => {
                    // A full cell also meets the minimum
                    staffed_cells += 1;
                    full_cells += 1;
                }
            }
            cell_status.push((day, shift, status));
        }

        let mut preferences_stated = 0;
        let mut preferences_honored = 0;
        for person in roster.persons() {
            preferences_stated += person.preferences().len();
            preferences_honored += person
                .preferences()
                .keys()
                .filter(|&&day| person.has_preference_match(day))
                .count();
        }

        let preference_honor_rate = if preferences_stated == 0 {
            1.0
        } else {
            preferences_honored as f64 / preferences_stated as f64
        };

        Self {
            total_cells: cell_status.len(),
            staffed_cells,
            full_cells,
            understaffed_cells,
            total_assignments: roster.grid().total_assignments(),
            preferences_stated,
            preferences_honored,
            preference_honor_rate,
            days_worked: roster.persons().iter().map(|p| p.days_worked()).collect(),
            cell_status,
        }
    }

    /// Whether every cell meets the minimum.
    pub fn is_fully_staffed(&self) -> bool {
        self.understaffed_cells == 0
    }

    /// Status of one cell, if it was recorded.
    pub fn status(&self, day: Weekday, shift: ShiftKind) -> Option<CellStatus> {
        self.cell_status
            .iter()
            .find(|&&(d, s, _)| d == day && s == shift)
            .map(|&(_, _, status)| status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;
    use crate::scheduler::ShiftScheduler;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_classify() {
        let limits = StaffingLimits::default();
        assert_eq!(CellStatus::classify(0, &limits), CellStatus::Understaffed);
        assert_eq!(CellStatus::classify(1, &limits), CellStatus::Understaffed);
        assert_eq!(CellStatus::classify(2, &limits), CellStatus::Staffed);
        assert_eq!(CellStatus::classify(7, &limits), CellStatus::Staffed);
        assert_eq!(CellStatus::classify(8, &limits), CellStatus::Full);
    }

    #[test]
    fn test_empty_roster_kpi() {
        let roster = Roster::new();
        let kpi = RosterKpi::calculate(&roster, &StaffingLimits::default());
        assert_eq!(kpi.total_cells, 21);
        assert_eq!(kpi.understaffed_cells, 21);
        assert_eq!(kpi.staffed_cells, 0);
        assert_eq!(kpi.total_assignments, 0);
        assert!((kpi.preference_honor_rate - 1.0).abs() < 1e-10);
        assert!(!kpi.is_fully_staffed());
    }

    #[test]
    fn test_kpi_after_run() {
        let mut roster = Roster::new();
        for i in 0..9 {
            roster
                .add_person(
                    Person::new(format!("P{i}"))
                        .with_preference(Weekday::Monday, ShiftKind::Morning),
                )
                .unwrap();
        }
        let scheduler = ShiftScheduler::new();
        scheduler.run(&mut roster, &mut SmallRng::seed_from_u64(3));

        let kpi = RosterKpi::calculate(&roster, scheduler.limits());
        assert_eq!(kpi.full_cells, 1);
        assert_eq!(
            kpi.status(Weekday::Monday, ShiftKind::Morning),
            Some(CellStatus::Full)
        );
        assert_eq!(
            kpi.status(Weekday::Monday, ShiftKind::Afternoon),
            Some(CellStatus::Understaffed)
        );
        assert_eq!(kpi.preferences_stated, 9);
        assert_eq!(kpi.preferences_honored, 8);
        assert!((kpi.preference_honor_rate - 8.0 / 9.0).abs() < 1e-10);
        assert_eq!(kpi.days_worked.len(), 9);
        assert_eq!(
            kpi.total_assignments,
            kpi.days_worked.iter().map(|&d| d as usize).sum::<usize>()
        );
        assert_eq!(kpi.staffed_cells + kpi.understaffed_cells, kpi.total_cells);
    }

    #[test]
    fn test_status_missing_cell() {
        let json = r#"{
            "total_cells": 1,
            "staffed_cells": 0,
            "full_cells": 0,
            "understaffed_cells": 1,
            "total_assignments": 0,
            "preferences_stated": 0,
            "preferences_honored": 0,
            "preference_honor_rate": 1.0,
            "days_worked": [],
            "cell_status": [["Monday", "Morning", "Understaffed"]]
        }"#;
        let kpi: RosterKpi = serde_json::from_str(json).unwrap();
        assert_eq!(
            kpi.status(Weekday::Monday, ShiftKind::Morning),
            Some(CellStatus::Understaffed)
        );
        assert_eq!(kpi.status(Weekday::Sunday, ShiftKind::Evening), None);
    }
}
