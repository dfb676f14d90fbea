//! Weekly shift roster engine.
//!
//! Assigns employees to a 7-day × 3-shift week from their per-cell
//! preference ranks, under a per-shift capacity and a weekly workday
//! quota. A deterministic priority pass is followed by a quota backfill
//! and a randomized residual fill.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Shift`, `Rank`, `Employee`,
//!   `ScheduleGrid`, `WorkdayCounter`
//! - **`scheduler`**: `ShiftScheduler`, the two passes, and `ScheduleKpi`
//! - **`validation`**: Roster integrity checks (blank/duplicate names, missing ranks)
//! - **`roster`**: Employee list management with JSON persistence
//! - **`export`**: CSV and text-table rendering of a finished week
//! - **`config`**: Limits and random seed, loadable from TOML
//! - **`error`**: Crate error type
//!
//! # Example
//!
//! ```
//! use shift_roster::{Day, Employee, Rank, Shift, ShiftScheduler};
//!
//! let employees: Vec<Employee> = ["Ann", "Ben", "Cal"]
//!     .iter()
//!     .map(|name| {
//!         Employee::new(*name)
//!             .with_uniform_rank(Rank::SECOND)
//!             .with_rank(Day::Monday, Shift::Morning, Rank::FIRST)
//!     })
//!     .collect();
//!
//! let outcome = ShiftScheduler::new().schedule(&employees).unwrap();
//! assert_eq!(outcome.grid.cell(Day::Monday, Shift::Morning), ["Ann", "Ben"]);
//! assert!(outcome.is_fully_scheduled());
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (`schedule_start`, `priority_pass_end`,
//! `backfill_end`, `random_fill_end`, `schedule_end`, plus per-placement
//! debug events). Install a subscriber in the host application to see them.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::{Result, ScheduleError};
pub use models::{Day, Employee, Rank, ScheduleGrid, Shift, WorkdayCounter};
pub use roster::Roster;
pub use scheduler::{ScheduleKpi, ScheduleOutcome, ShiftScheduler};
