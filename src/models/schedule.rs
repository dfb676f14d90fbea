//! Schedule grid model.
//!
//! The grid is the weekly table being filled: one ordered list of
//! employee names per (day, shift) cell. It enforces only cell capacity;
//! same-day exclusivity is checked by the passes before they place.
//!
//! # Invariants
//! - Every cell holds at most `capacity` names.
//! - Placement order within a cell is preserved.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::calendar::{DAY_COUNT, SHIFT_COUNT};
use super::{Day, Shift};

/// Weekly 7×3 assignment table with a per-cell capacity.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Day, ScheduleGrid, Shift};
///
/// let mut grid = ScheduleGrid::new(2);
/// assert!(grid.try_place(Day::Monday, Shift::Morning, "Alice"));
/// assert!(grid.try_place(Day::Monday, Shift::Morning, "Bob"));
/// assert!(!grid.try_place(Day::Monday, Shift::Morning, "Cara"));
/// assert!(grid.is_working_day(Day::Monday, "Bob"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleGrid {
    capacity: usize,
    cells: [[Vec<String>; SHIFT_COUNT]; DAY_COUNT],
}

impl ScheduleGrid {
    /// Creates an empty grid where each cell holds up to `capacity` names.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cells: Default::default(),
        }
    }

    /// Clears every cell.
    pub fn initialize(&mut self) {
        for day in self.cells.iter_mut() {
            for cell in day.iter_mut() {
                cell.clear();
            }
        }
    }

    /// Maximum names per cell.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Names placed in a cell, in placement order.
    pub fn cell(&self, day: Day, shift: Shift) -> &[String] {
        &self.cells[day.index()][shift.index()]
    }

    /// Whether a cell is below capacity.
    pub fn has_room(&self, day: Day, shift: Shift) -> bool {
        self.cell(day, shift).len() < self.capacity
    }

    /// Appends `name` to the cell if it has room.
    ///
    /// Returns whether the placement happened. Does not check whether
    /// `name` already works another shift that day.
    pub fn try_place(&mut self, day: Day, shift: Shift, name: &str) -> bool {
        if !self.has_room(day, shift) {
            return false;
        }
        self.cells[day.index()][shift.index()].push(name.to_string());
        true
    }

    /// Whether `name` is in the given cell.
    pub fn contains(&self, day: Day, shift: Shift, name: &str) -> bool {
        self.cell(day, shift).iter().any(|n| n == name)
    }

    /// Whether `name` works any shift on `day`.
    pub fn is_working_day(&self, day: Day, name: &str) -> bool {
        self.shift_on(day, name).is_some()
    }

    /// The shift `name` works on `day`, if any.
    pub fn shift_on(&self, day: Day, name: &str) -> Option<Shift> {
        Shift::ALL
            .into_iter()
            .find(|&shift| self.contains(day, shift, name))
    }

    /// Number of days on which `name` appears.
    pub fn workdays_of(&self, name: &str) -> usize {
        Day::ALL
            .iter()
            .filter(|&&day| self.is_working_day(day, name))
            .count()
    }

    /// Iterates all cells in week order, then shift order.
    pub fn cells(&self) -> impl Iterator<Item = (Day, Shift, &[String])> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            Shift::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.cell(day, shift)))
        })
    }

    /// Total seats across the week.
    pub fn total_seats(&self) -> usize {
        DAY_COUNT * SHIFT_COUNT * self.capacity
    }

    /// Number of names placed.
    pub fn filled_seats(&self) -> usize {
        self.cells().map(|(_, _, names)| names.len()).sum()
    }

    /// Seats still open.
    pub fn open_seats(&self) -> usize {
        self.total_seats().saturating_sub(self.filled_seats())
    }

    /// Whether nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.filled_seats() == 0
    }
}

impl<'de> Deserialize<'de> for ScheduleGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            capacity: usize,
            cells: [[Vec<String>; SHIFT_COUNT]; DAY_COUNT],
        }

        let raw = Raw::deserialize(deserializer)?;
        let grid = ScheduleGrid {
            capacity: raw.capacity,
            cells: raw.cells,
        };
        if let Some((day, shift, names)) = grid.cells().find(|(_, _, n)| n.len() > grid.capacity) {
            return Err(D::Error::custom(format!(
                "{day} {shift} holds {} names, capacity is {}",
                names.len(),
                grid.capacity
            )));
        }
        Ok(grid)
    }
}
