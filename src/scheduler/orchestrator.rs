//! Two-pass roster scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the roster and limits.
//! 2. Build an empty grid and zeroed workday counter for this run.
//! 3. Priority pass: each day, best-ranked employees claim their
//!    favourite shift with room.
//! 4. Slot filler: backfill employees below quota in week order, then
//!    fill open seats at random among eligible employees.
//! 5. Report everyone still below quota as unresolved.
//!
//! Deterministic except for the residual random fill; seed the RNG to
//! make runs repeatable.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::filler::fill_remaining_slots;
use super::priority::assign_priority_shifts;
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Employee, ScheduleGrid, WorkdayCounter};
use crate::validation::validate_roster;

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// The filled week.
    pub grid: ScheduleGrid,
    /// Final days per employee.
    pub workdays: WorkdayCounter,
    /// Employees left below quota, sorted by name.
    pub unresolved: BTreeSet<String>,
}

impl ScheduleOutcome {
    /// Whether every employee reached quota.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Days assigned to `name`.
    pub fn workdays_of(&self, name: &str) -> usize {
        self.workdays.get(name)
    }
}

/// Weekly roster scheduler.
///
/// Runs the priority pass and the slot filler over a fresh grid per call;
/// holds no state between runs.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Day, Employee, Rank, Shift};
/// use shift_roster::scheduler::ShiftScheduler;
///
/// let employees = vec![
///     Employee::new("Alice")
///         .with_uniform_rank(Rank::THIRD)
///         .with_rank(Day::Monday, Shift::Morning, Rank::FIRST),
///     Employee::new("Bob").with_uniform_rank(Rank::SECOND),
/// ];
///
/// let outcome = ShiftScheduler::new().schedule(&employees).unwrap();
/// assert!(outcome.grid.contains(Day::Monday, Shift::Morning, "Alice"));
/// assert_eq!(outcome.workdays_of("Bob"), 5);
/// assert!(outcome.is_fully_scheduled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    config: SchedulerConfig,
}

impl ShiftScheduler {
    /// Creates a scheduler with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules the roster.
    ///
    /// Uses `random_seed` from the configuration when set, otherwise the
    /// thread RNG.
    pub fn schedule(&self, employees: &[Employee]) -> Result<ScheduleOutcome> {
        match self.config.random_seed {
            Some(seed) => self.schedule_with_rng(employees, &mut StdRng::seed_from_u64(seed)),
            None => self.schedule_with_rng(employees, &mut rand::rng()),
        }
    }

    /// Schedules the roster drawing residual-fill picks from `rng`.
    ///
    /// # Errors
    /// - [`ScheduleError::NoEmployees`] for an empty roster.
    /// - [`ScheduleError::InvalidRoster`] for blank or duplicate names and
    ///   incomplete preferences.
    /// - [`ScheduleError::InvalidConfig`] for unusable limits.
    pub fn schedule_with_rng<R: Rng>(
        &self,
        employees: &[Employee],
        rng: &mut R,
    ) -> Result<ScheduleOutcome> {
        if employees.is_empty() {
            return Err(ScheduleError::NoEmployees);
        }
        self.config.validate()?;
        validate_roster(employees).map_err(ScheduleError::InvalidRoster)?;

        info!(
            event = "schedule_start",
            employees = employees.len(),
            max_per_shift = self.config.max_per_shift,
            max_days_per_week = self.config.max_days_per_week,
        );

        let mut grid = ScheduleGrid::new(self.config.max_per_shift);
        let mut workdays = WorkdayCounter::new(employees, self.config.max_days_per_week);

        assign_priority_shifts(employees, &mut grid, &mut workdays);
        let mut unresolved = fill_remaining_slots(employees, &mut grid, &mut workdays, rng);

        // Anyone the random fill left short also counts
        unresolved.extend(
            workdays
                .under_quota(employees)
                .into_iter()
                .map(str::to_string),
        );

        info!(
            event = "schedule_end",
            filled_seats = grid.filled_seats(),
            open_seats = grid.open_seats(),
            unresolved = unresolved.len(),
        );

        Ok(ScheduleOutcome {
            grid,
            workdays,
            unresolved,
        })
    }
}
