//! Employee model.
//!
//! An employee is a uniquely named worker with a ranked preference for
//! every (day, shift) cell of the week. Rank 1 is most preferred.
//!
//! Names are unique ignoring case; see [`name_key`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::{Day, Shift};
use crate::error::ScheduleError;

/// Preference rank for a (day, shift) cell: 1 (most preferred) to 3.
///
/// Deserializes from a JSON number or a numeric string, so `1` and `"1"`
/// are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Most preferred.
    pub const FIRST: Rank = Rank(1);
    /// Second choice.
    pub const SECOND: Rank = Rank(2);
    /// Least preferred.
    pub const THIRD: Rank = Rank(3);

    /// Creates a rank, rejecting values outside 1..=3.
    pub fn new(value: u8) -> Result<Self, ScheduleError> {
        if (1..=3).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScheduleError::InvalidRank(value.to_string()))
        }
    }

    /// Numeric value (1..=3).
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u8),
            Text(String),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(value) => value,
            Raw::Text(text) => text
                .trim()
                .parse::<u8>()
                .map_err(|_| D::Error::custom(format!("invalid rank '{text}'")))?,
        };
        Rank::new(value).map_err(D::Error::custom)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

/// An employee to be rostered.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Day, Employee, Rank, Shift};
///
/// let alice = Employee::new("Alice")
///     .with_uniform_rank(Rank::SECOND)
///     .with_rank(Day::Monday, Shift::Morning, Rank::FIRST);
///
/// assert!(alice.is_complete());
/// assert_eq!(alice.best_rank(Day::Monday), Some(Rank::FIRST));
/// assert_eq!(alice.shifts_by_preference(Day::Monday)[0], Shift::Morning);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name, unique ignoring case.
    pub name: String,
    /// Rank per day and shift.
    #[serde(default)]
    pub preferences: BTreeMap<Day, BTreeMap<Shift, Rank>>,
}

impl Employee {
    /// Creates an employee with no preferences.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
        }
    }

    /// Sets the rank for one cell.
    pub fn with_rank(mut self, day: Day, shift: Shift, rank: Rank) -> Self {
        self.set_rank(day, shift, rank);
        self
    }

    /// Sets a day's ranks in shift order (Morning, Afternoon, Evening).
    pub fn with_day_ranks(mut self, day: Day, ranks: [Rank; 3]) -> Self {
        for (shift, rank) in Shift::ALL.into_iter().zip(ranks) {
            self.set_rank(day, shift, rank);
        }
        self
    }

    /// Sets the same rank for every cell of the week.
    pub fn with_uniform_rank(mut self, rank: Rank) -> Self {
        for day in Day::ALL {
            for shift in Shift::ALL {
                self.set_rank(day, shift, rank);
            }
        }
        self
    }

    /// Sets the rank for one cell in place.
    pub fn set_rank(&mut self, day: Day, shift: Shift, rank: Rank) {
        self.preferences.entry(day).or_default().insert(shift, rank);
    }

    /// Rank for a cell, if defined.
    pub fn rank(&self, day: Day, shift: Shift) -> Option<Rank> {
        self.preferences.get(&day)?.get(&shift).copied()
    }

    /// Best (lowest) rank across the day's shifts.
    pub fn best_rank(&self, day: Day) -> Option<Rank> {
        Shift::ALL.iter().filter_map(|&s| self.rank(day, s)).min()
    }

    /// The day's shifts ordered best rank first.
    ///
    /// Equal ranks keep daily order; cells without a rank sort last.
    /// Returns a fresh array on every call.
    pub fn shifts_by_preference(&self, day: Day) -> [Shift; 3] {
        let mut order = Shift::ALL;
        order.sort_by_key(|&shift| self.rank(day, shift).map_or(u8::MAX, Rank::value));
        order
    }

    /// Cells with no rank, in week order.
    pub fn missing_preferences(&self) -> Vec<(Day, Shift)> {
        Day::ALL
            .iter()
            .flat_map(|&day| Shift::ALL.iter().map(move |&shift| (day, shift)))
            .filter(|&(day, shift)| self.rank(day, shift).is_none())
            .collect()
    }

    /// Whether all 21 cells carry a rank.
    pub fn is_complete(&self) -> bool {
        self.missing_preferences().is_empty()
    }

    /// Whether `other` names this employee, ignoring case.
    pub fn has_name(&self, other: &str) -> bool {
        name_key(&self.name) == name_key(other)
    }
}

/// Comparison key for employee names: trimmed and lowercased.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(1).unwrap(), Rank::FIRST);
        assert_eq!(Rank::new(3).unwrap().value(), 3);
        assert!(Rank::new(0).is_err());
        assert!(Rank::new(4).is_err());
        assert!(Rank::try_from(2u8).is_ok());
    }

    #[test]
    fn test_rank_deserialize_number_or_string() {
        let a: Rank = serde_json::from_str("2").unwrap();
        let b: Rank = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(a, Rank::SECOND);
        assert_eq!(a, b);
        assert!(serde_json::from_str::<Rank>("\"high\"").is_err());
        assert!(serde_json::from_str::<Rank>("7").is_err());
        assert_eq!(serde_json::to_string(&Rank::THIRD).unwrap(), "3");
    }

    #[test]
    fn test_builder_and_lookup() {
        let e = Employee::new("Bob")
            .with_uniform_rank(Rank::THIRD)
            .with_day_ranks(Day::Friday, [Rank::SECOND, Rank::FIRST, Rank::THIRD]);

        assert_eq!(e.rank(Day::Friday, Shift::Afternoon), Some(Rank::FIRST));
        assert_eq!(e.rank(Day::Monday, Shift::Morning), Some(Rank::THIRD));
        assert_eq!(e.best_rank(Day::Friday), Some(Rank::FIRST));
        assert_eq!(e.best_rank(Day::Monday), Some(Rank::THIRD));
    }

    #[test]
    fn test_shifts_by_preference_sorted_and_stable() {
        let e = Employee::new("Cy")
            .with_day_ranks(Day::Monday, [Rank::THIRD, Rank::FIRST, Rank::SECOND])
            .with_day_ranks(Day::Tuesday, [Rank::SECOND, Rank::SECOND, Rank::FIRST]);

        assert_eq!(
            e.shifts_by_preference(Day::Monday),
            [Shift::Afternoon, Shift::Evening, Shift::Morning]
        );
        // Ties keep Morning before Afternoon
        assert_eq!(
            e.shifts_by_preference(Day::Tuesday),
            [Shift::Evening, Shift::Morning, Shift::Afternoon]
        );
        // Repeated calls give the same answer (no shared state)
        assert_eq!(e.shifts_by_preference(Day::Monday), e.shifts_by_preference(Day::Monday));
    }

    #[test]
    fn test_missing_preferences() {
        let partial = Employee::new("Dee").with_day_ranks(
            Day::Monday,
            [Rank::FIRST, Rank::FIRST, Rank::FIRST],
        );
        assert!(!partial.is_complete());
        assert_eq!(partial.missing_preferences().len(), 18);
        assert_eq!(partial.missing_preferences()[0], (Day::Tuesday, Shift::Morning));

        let full = Employee::new("Eve").with_uniform_rank(Rank::FIRST);
        assert!(full.is_complete());
        assert!(full.missing_preferences().is_empty());
    }

    #[test]
    fn test_missing_cells_sort_last() {
        let e = Employee::new("Fay").with_rank(Day::Sunday, Shift::Evening, Rank::THIRD);
        assert_eq!(
            e.shifts_by_preference(Day::Sunday),
            [Shift::Evening, Shift::Morning, Shift::Afternoon]
        );
        assert_eq!(e.best_rank(Day::Monday), None);
    }

    #[test]
    fn test_name_matching_ignores_case() {
        let e = Employee::new("Alice");
        assert!(e.has_name("alice"));
        assert!(e.has_name("  ALICE "));
        assert!(!e.has_name("Alicia"));
        assert_eq!(name_key(" Bob "), "bob");
    }

    #[test]
    fn test_deserialize_stored_record() {
        let json = r#"{
            "name": "Gus",
            "preferences": {
                "Monday": { "Morning": "1", "Afternoon": "2", "Evening": "3" }
            }
        }"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.name, "Gus");
        assert_eq!(e.rank(Day::Monday, Shift::Evening), Some(Rank::THIRD));
        assert_eq!(e.missing_preferences().len(), 18);
    }
}
