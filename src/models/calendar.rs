//! Weekly calendar model.
//!
//! A roster week is a fixed grid of 7 days and 3 shifts per day.
//! Both axes have a fixed order which every pass iterates in:
//! Monday → Sunday, Morning → Evening.
//!
//! # Serialization
//! Days and shifts serialize as their labels (`"Monday"`, `"Morning"`),
//! which is also how stored rosters key their preference tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in a roster week.
pub const DAY_COUNT: usize = 7;

/// Number of shifts per day.
pub const SHIFT_COUNT: usize = 3;

/// A day of the roster week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A daily work period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; DAY_COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl Shift {
    /// All shifts in daily order.
    pub const ALL: [Shift; SHIFT_COUNT] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Zero-based position within the day.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
