//! Schedule quality metrics (KPIs).
//!
//! Computes roster indicators from a finished run and its input
//! employees.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Seats | Total, filled and open seats across the week |
//! | Fill Rate | filled / total |
//! | At Quota | Employees working exactly the weekly quota |
//! | Avg Assigned Rank | Mean rank of the shift each assignment landed on |
//! | First-Choice Rate | Fraction of assignments on a rank-1 shift |
//! | Days by Employee | Distinct days worked per employee |

use std::collections::{BTreeMap, HashMap};

use super::ScheduleOutcome;
use crate::models::{Employee, Rank};

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Seats in the week (cells × capacity).
    pub total_seats: usize,
    /// Seats holding a name.
    pub filled_seats: usize,
    /// Seats left empty.
    pub open_seats: usize,
    /// Fraction of seats filled (0.0..1.0).
    pub fill_rate: f64,
    /// Employees whose day count equals the quota.
    pub employees_at_quota: usize,
    /// Mean preference rank over all assignments (1.0..3.0, 0.0 if none).
    pub avg_assigned_rank: f64,
    /// Fraction of assignments on a first-choice shift (0.0..1.0).
    pub first_choice_rate: f64,
    /// Days worked per employee.
    pub days_by_employee: BTreeMap<String, usize>,
}

impl ScheduleKpi {
    /// Computes KPIs from a run and its input employees.
    ///
    /// # Arguments
    /// * `outcome` - The finished run.
    /// * `employees` - The roster that was scheduled (for ranks).
    pub fn calculate(outcome: &ScheduleOutcome, employees: &[Employee]) -> Self {
        let grid = &outcome.grid;
        let by_name: HashMap<&str, &Employee> =
            employees.iter().map(|e| (e.name.as_str(), e)).collect();

        let mut rank_sum: u64 = 0;
        let mut ranked: usize = 0;
        let mut first_choice: usize = 0;

        for (day, shift, names) in grid.cells() {
            for name in names {
                // Names not in the roster carry no rank
                let Some(rank) = by_name.get(name.as_str()).and_then(|e| e.rank(day, shift))
                else {
                    continue;
                };
                ranked += 1;
                rank_sum += u64::from(rank.value());
                if rank == Rank::FIRST {
                    first_choice += 1;
                }
            }
        }

        let days_by_employee: BTreeMap<String, usize> = employees
            .iter()
            .map(|e| (e.name.clone(), grid.workdays_of(&e.name)))
            .collect();
        let quota = outcome.workdays.max_days();
        let employees_at_quota = days_by_employee.values().filter(|&&d| d == quota).count();

        let total_seats = grid.total_seats();
        let filled_seats = grid.filled_seats();
        let fill_rate = if total_seats == 0 {
            0.0
        } else {
            filled_seats as f64 / total_seats as f64
        };

        let (avg_assigned_rank, first_choice_rate) = if ranked == 0 {
            (0.0, 0.0)
        } else {
            (
                rank_sum as f64 / ranked as f64,
                first_choice as f64 / ranked as f64,
            )
        };

        Self {
            total_seats,
            filled_seats,
            open_seats: grid.open_seats(),
            fill_rate,
            employees_at_quota,
            avg_assigned_rank,
            first_choice_rate,
            days_by_employee,
        }
    }

    /// Whether the roster meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_fill_rate: f64, min_first_choice_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate && self.first_choice_rate >= min_first_choice_rate
    }
}
