//! Roster domain models.
//!
//! Provides the data types a scheduling run works over: the fixed week
//! calendar, employees with ranked preferences, the capacity-bounded
//! schedule grid, and the per-employee workday counter.
//!
//! # Week Layout
//!
//! | Axis | Values | Order |
//! |------|--------|-------|
//! | Day | Monday … Sunday | fixed, week order |
//! | Shift | Morning, Afternoon, Evening | fixed, daily order |
//! | Rank | 1, 2, 3 | 1 = most preferred |

mod calendar;
mod employee;
mod schedule;
mod workload;

pub use calendar::{Day, Shift, DAY_COUNT, SHIFT_COUNT};
pub use employee::{name_key, Employee, Rank};
pub use schedule::ScheduleGrid;
pub use workload::WorkdayCounter;
