//! Pass 1: preference-driven daily assignment.
//!
//! # Algorithm
//!
//! For each day independently:
//! 1. Compute each employee's best rank for the day.
//! 2. Stable-sort employees by that rank (ties keep list order).
//! 3. Skip employees at quota or already working the day.
//! 4. Place the employee on the first of their shifts, best rank first,
//!    that still has room.
//!
//! Employees with no free shift are left for the slot filler.
//!
//! # Complexity
//! O(d · (n log n + n · s · c)) where d=days, n=employees, s=shifts,
//! c=cell capacity.

use tracing::{debug, info};

use super::place_by_preference;
use crate::models::{Day, Employee, ScheduleGrid, WorkdayCounter};

/// Runs the priority pass over every day of the week.
///
/// Mutates `grid` and `workdays` in place and never fails; an employee
/// may end the pass with fewer days than the quota.
pub fn assign_priority_shifts(
    employees: &[Employee],
    grid: &mut ScheduleGrid,
    workdays: &mut WorkdayCounter,
) {
    let mut placed = 0usize;

    for day in Day::ALL {
        for idx in priority_order(employees, day) {
            let employee = &employees[idx];
            if !workdays.below_quota(&employee.name) || grid.is_working_day(day, &employee.name) {
                continue;
            }

            if let Some(shift) = place_by_preference(employee, day, grid) {
                workdays.increment(&employee.name);
                placed += 1;
                debug!(
                    event = "priority_placed",
                    employee = %employee.name,
                    day = %day,
                    shift = %shift,
                );
            }
        }
    }

    info!(event = "priority_pass_end", placed = placed);
}

/// Employee indices for `day`, best rank first.
///
/// Stable: employees with equal best rank keep their list order.
pub fn priority_order(employees: &[Employee], day: Day) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..employees.len()).collect();
    indices.sort_by_key(|&i| employees[i].best_rank(day).map_or(u8::MAX, |r| r.value()));
    indices
}
