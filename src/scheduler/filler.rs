//! Pass 2: quota backfill and residual random fill.
//!
//! # Algorithm
//!
//! **Backfill** (employees in list order): while an employee is below
//! quota, scan Monday → Sunday for a day they don't work yet and place
//! them on the first of their shifts, best rank first, with room. Each
//! success restarts the scan from Monday. A scan that places nothing
//! marks the employee unresolved.
//!
//! **Residual fill** (cells in week, then shift order): while a cell has
//! room, pick uniformly at random among employees below quota, not
//! unresolved, and not working that day. Eligibility is recomputed after
//! every pick. A cell may stay open.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info};

use super::place_by_preference;
use crate::models::{Day, Employee, ScheduleGrid, Shift, WorkdayCounter};

/// Runs backfill then residual fill.
///
/// Returns the employees marked unresolved during backfill.
pub fn fill_remaining_slots<R: Rng>(
    employees: &[Employee],
    grid: &mut ScheduleGrid,
    workdays: &mut WorkdayCounter,
    rng: &mut R,
) -> BTreeSet<String> {
    let unresolved = backfill_workdays(employees, grid, workdays);
    fill_open_seats(employees, grid, workdays, &unresolved, rng);
    unresolved
}

/// Pushes every employee toward quota by scanning days in week order.
///
/// Returns the names for which a full scan found no free seat.
pub fn backfill_workdays(
    employees: &[Employee],
    grid: &mut ScheduleGrid,
    workdays: &mut WorkdayCounter,
) -> BTreeSet<String> {
    let mut unresolved = BTreeSet::new();
    let mut placed = 0usize;

    for employee in employees {
        let name = employee.name.as_str();
        while workdays.below_quota(name) {
            let mut next = None;
            for day in Day::ALL {
                if grid.is_working_day(day, name) {
                    continue;
                }
                if let Some(shift) = place_by_preference(employee, day, grid) {
                    next = Some((day, shift));
                    break;
                }
            }

            match next {
                Some((day, shift)) => {
                    workdays.increment(name);
                    placed += 1;
                    debug!(event = "backfill_placed", employee = %name, day = %day, shift = %shift);
                }
                None => {
                    debug!(
                        event = "unresolved",
                        employee = %name,
                        workdays = workdays.get(name),
                    );
                    unresolved.insert(name.to_string());
                    break;
                }
            }
        }
    }

    info!(
        event = "backfill_end",
        placed = placed,
        unresolved = unresolved.len(),
    );
    unresolved
}

/// Fills cells still below capacity with randomly chosen eligible employees.
pub fn fill_open_seats<R: Rng>(
    employees: &[Employee],
    grid: &mut ScheduleGrid,
    workdays: &mut WorkdayCounter,
    unresolved: &BTreeSet<String>,
    rng: &mut R,
) {
    let mut placed = 0usize;

    for day in Day::ALL {
        for shift in Shift::ALL {
            while grid.has_room(day, shift) {
                let candidates = eligible_candidates(employees, grid, workdays, unresolved, day, shift);
                if candidates.is_empty() {
                    break;
                }

                let chosen = candidates[rng.random_range(0..candidates.len())];
                if !grid.try_place(day, shift, chosen) {
                    break;
                }
                workdays.increment(chosen);
                placed += 1;
                debug!(event = "random_fill_placed", employee = %chosen, day = %day, shift = %shift);
            }
        }
    }

    info!(
        event = "random_fill_end",
        placed = placed,
        open_seats = grid.open_seats(),
    );
}

/// Employees that may take a seat in (`day`, `shift`), in list order.
fn eligible_candidates<'a>(
    employees: &'a [Employee],
    grid: &ScheduleGrid,
    workdays: &WorkdayCounter,
    unresolved: &BTreeSet<String>,
    day: Day,
    shift: Shift,
) -> Vec<&'a str> {
    employees
        .iter()
        .map(|e| e.name.as_str())
        .filter(|&name| {
            workdays.below_quota(name)
                && !grid.contains(day, shift, name)
                && !unresolved.contains(name)
                && !grid.is_working_day(day, name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rank;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uniform(name: &str, rank: Rank) -> Employee {
        Employee::new(name).with_uniform_rank(rank)
    }

    #[test]
    fn test_backfill_reaches_quota() {
        let employees = vec![uniform("A", Rank::FIRST)];
        let mut grid = ScheduleGrid::new(2);
        let mut workdays = WorkdayCounter::new(&employees, 5);

        let unresolved = backfill_workdays(&employees, &mut grid, &mut workdays);

        assert!(unresolved.is_empty());
        assert_eq!(workdays.get("A"), 5);
        // Week order: Monday through Friday
        for day in &Day::ALL[..5] {
            assert_eq!(grid.shift_on(*day, "A"), Some(Shift::Morning));
        }
    }

    #[test]
    fn test_backfill_prefers_best_ranked_shift() {
        let employees = vec![uniform("A", Rank::THIRD).with_day_ranks(
            Day::Monday,
            [Rank::THIRD, Rank::SECOND, Rank::FIRST],
        )];
        let mut grid = ScheduleGrid::new(1);
        let mut workdays = WorkdayCounter::new(&employees, 1);

        backfill_workdays(&employees, &mut grid, &mut workdays);

        assert_eq!(grid.cell(Day::Monday, Shift::Evening), ["A"]);
    }

    #[test]
    fn test_backfill_skips_full_days() {
        let employees = vec![uniform("A", Rank::FIRST)];
        let mut grid = ScheduleGrid::new(1);
        for shift in Shift::ALL {
            grid.try_place(Day::Monday, shift, "X");
        }
        let mut workdays = WorkdayCounter::new(&employees, 1);

        backfill_workdays(&employees, &mut grid, &mut workdays);

        assert!(!grid.is_working_day(Day::Monday, "A"));
        assert!(grid.is_working_day(Day::Tuesday, "A"));
    }

    #[test]
    fn test_backfill_marks_unresolved() {
        // Capacity 1 gives 21 seats; A, B and C take all of them at quota 7
        let employees: Vec<Employee> = ["A", "B", "C", "D"]
            .iter()
            .map(|n| uniform(n, Rank::FIRST))
            .collect();
        let mut grid = ScheduleGrid::new(1);
        let mut workdays = WorkdayCounter::new(&employees, 7);

        let unresolved = backfill_workdays(&employees, &mut grid, &mut workdays);

        assert_eq!(workdays.get("A"), 7);
        assert_eq!(workdays.get("B"), 7);
        assert_eq!(workdays.get("C"), 7);
        assert_eq!(workdays.get("D"), 0);
        assert_eq!(unresolved.into_iter().collect::<Vec<_>>(), vec!["D"]);
    }

    #[test]
    fn test_random_fill_respects_exclusivity_and_quota() {
        let employees = vec![uniform("A", Rank::FIRST), uniform("B", Rank::FIRST)];
        let mut grid = ScheduleGrid::new(2);
        let mut workdays = WorkdayCounter::new(&employees, 5);
        let mut rng = StdRng::seed_from_u64(7);

        fill_open_seats(&employees, &mut grid, &mut workdays, &BTreeSet::new(), &mut rng);

        for day in Day::ALL {
            for name in ["A", "B"] {
                let shifts = Shift::ALL
                    .iter()
                    .filter(|&&s| grid.contains(day, s, name))
                    .count();
                assert!(shifts <= 1);
            }
        }
        assert_eq!(workdays.get("A"), 5);
        assert_eq!(workdays.get("B"), 5);
        assert_eq!(grid.workdays_of("A"), 5);
        assert_eq!(grid.workdays_of("B"), 5);
    }

    #[test]
    fn test_random_fill_skips_unresolved() {
        let employees = vec![uniform("A", Rank::FIRST), uniform("B", Rank::FIRST)];
        let mut grid = ScheduleGrid::new(2);
        let mut workdays = WorkdayCounter::new(&employees, 5);
        let unresolved: BTreeSet<String> = ["B".to_string()].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        fill_open_seats(&employees, &mut grid, &mut workdays, &unresolved, &mut rng);

        assert_eq!(grid.workdays_of("B"), 0);
        assert_eq!(grid.workdays_of("A"), 5);
    }

    #[test]
    fn test_random_fill_seeded_is_repeatable() {
        let employees: Vec<Employee> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|n| uniform(n, Rank::SECOND))
            .collect();

        let run = |seed: u64| {
            let mut grid = ScheduleGrid::new(2);
            let mut workdays = WorkdayCounter::new(&employees, 5);
            let mut rng = StdRng::seed_from_u64(seed);
            fill_open_seats(&employees, &mut grid, &mut workdays, &BTreeSet::new(), &mut rng);
            grid
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_fill_remaining_slots_backfill_saturates() {
        // Everyone reaches quota in backfill, so residual fill has no one
        let employees = vec![uniform("A", Rank::FIRST), uniform("B", Rank::SECOND)];
        let mut grid = ScheduleGrid::new(2);
        let mut workdays = WorkdayCounter::new(&employees, 5);
        let mut rng = StdRng::seed_from_u64(3);

        let unresolved = fill_remaining_slots(&employees, &mut grid, &mut workdays, &mut rng);

        assert!(unresolved.is_empty());
        assert_eq!(grid.filled_seats(), 10);
        assert_eq!(grid.cell(Day::Monday, Shift::Morning), ["A", "B"]);
        assert!(grid.cell(Day::Saturday, Shift::Morning).is_empty());
    }
}
