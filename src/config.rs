//! Staffing limits.
//!
//! The defaults are the fixed constants of a standard week: at least
//! [`MIN_PER_SHIFT`] and at most [`MAX_PER_SHIFT`] people per shift.
//! The weekly workload cap is carried by each person and never exceeds
//! [`MAX_DAYS_PER_WEEK`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Minimum people per (day, shift) cell.
pub const MIN_PER_SHIFT: usize = 2;

/// Maximum people per (day, shift) cell.
pub const MAX_PER_SHIFT: usize = 8;

/// Maximum working days per person per week.
pub const MAX_DAYS_PER_WEEK: u8 = 5;

/// Per-cell staffing bounds applied by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffingLimits {
    /// Backfill target per cell.
    pub min_per_shift: usize,
    /// Hard capacity per cell.
    pub max_per_shift: usize,
}

impl Default for StaffingLimits {
    fn default() -> Self {
        Self {
            min_per_shift: MIN_PER_SHIFT,
            max_per_shift: MAX_PER_SHIFT,
        }
    }
}

impl StaffingLimits {
    /// Creates the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-cell minimum.
    pub fn with_min_per_shift(mut self, min: usize) -> Self {
        self.min_per_shift = min;
        self
    }

    /// Sets the per-cell capacity.
    pub fn with_max_per_shift(mut self, max: usize) -> Self {
        self.max_per_shift = max;
        self
    }

    /// Checks that the limits describe a satisfiable configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_per_shift == 0 {
            return Err(RosterError::InvalidLimits(
                "max_per_shift must be at least 1".into(),
            ));
        }
        if self.min_per_shift > self.max_per_shift {
            return Err(RosterError::InvalidLimits(format!(
                "min_per_shift ({}) exceeds max_per_shift ({})",
                self.min_per_shift, self.max_per_shift
            )));
        }
        Ok(())
    }
}
