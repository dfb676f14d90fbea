//! Two-pass greedy roster scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `ShiftScheduler` runs two greedy passes over one grid and one workday
//! counter:
//!
//! 1. **Priority pass** (`priority`): day by day, employees with the
//!    strongest preference claim their best-ranked shift with room.
//! 2. **Slot filler** (`filler`): employees under quota are backfilled in
//!    week order, then leftover seats are drawn at random.
//!
//! Neither pass is optimal; the result favours early days and early list
//! positions.
//!
//! # KPI
//!
//! `ScheduleKpi` reports seat coverage, quota attainment and how well
//! assignments match preferences.

mod filler;
mod kpi;
mod orchestrator;
mod priority;

pub use filler::{backfill_workdays, fill_open_seats, fill_remaining_slots};
pub use kpi::ScheduleKpi;
pub use orchestrator::{ScheduleOutcome, ShiftScheduler};
pub use priority::{assign_priority_shifts, priority_order};

use crate::models::{Day, Employee, ScheduleGrid, Shift};

/// Places `employee` on the first shift of `day`, best rank first, that
/// has room.
fn place_by_preference(employee: &Employee, day: Day, grid: &mut ScheduleGrid) -> Option<Shift> {
    employee
        .shifts_by_preference(day)
        .into_iter()
        .find(|&shift| grid.try_place(day, shift, &employee.name))
}
