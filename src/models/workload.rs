//! Per-employee workday counter.
//!
//! Tracks how many distinct days each employee currently works during a
//! run. Both passes increment it right after a successful placement, so it
//! always equals the number of days the employee appears in the grid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Employee;

/// Distinct assigned days per employee, bounded by a weekly quota.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkdayCounter {
    max_days: usize,
    counts: BTreeMap<String, usize>,
}

impl WorkdayCounter {
    /// Creates a counter at zero for every employee.
    pub fn new(employees: &[Employee], max_days: usize) -> Self {
        Self {
            max_days,
            counts: employees.iter().map(|e| (e.name.clone(), 0)).collect(),
        }
    }

    /// Weekly quota.
    #[inline]
    pub fn max_days(&self) -> usize {
        self.max_days
    }

    /// Days currently assigned to `name` (0 if unknown).
    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Whether `name` is below quota.
    pub fn below_quota(&self, name: &str) -> bool {
        self.get(name) < self.max_days
    }

    /// Records one more assigned day for `name`.
    pub fn increment(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Names below quota, in the order of `employees`.
    pub fn under_quota<'a>(&self, employees: &'a [Employee]) -> Vec<&'a str> {
        employees
            .iter()
            .map(|e| e.name.as_str())
            .filter(|name| self.below_quota(name))
            .collect()
    }

    /// Iterates `(name, days)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, &days)| (name.as_str(), days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Employee> {
        vec![Employee::new("A"), Employee::new("B")]
    }

    #[test]
    fn test_starts_at_zero() {
        let c = WorkdayCounter::new(&staff(), 5);
        assert_eq!(c.get("A"), 0);
        assert_eq!(c.get("B"), 0);
        assert_eq!(c.max_days(), 5);
        assert_eq!(c.iter().count(), 2);
    }

    #[test]
    fn test_increment_and_quota() {
        let mut c = WorkdayCounter::new(&staff(), 2);
        c.increment("A");
        assert!(c.below_quota("A"));
        c.increment("A");
        assert_eq!(c.get("A"), 2);
        assert!(!c.below_quota("A"));
        assert!(c.below_quota("B"));
    }

    #[test]
    fn test_under_quota_keeps_list_order() {
        let employees = vec![Employee::new("Z"), Employee::new("A"), Employee::new("M")];
        let mut c = WorkdayCounter::new(&employees, 1);
        c.increment("A");
        assert_eq!(c.under_quota(&employees), vec!["Z", "M"]);
    }

    #[test]
    fn test_unknown_name() {
        let c = WorkdayCounter::new(&staff(), 5);
        assert_eq!(c.get("Nobody"), 0);
        assert!(c.below_quota("Nobody"));
    }

    #[test]
    fn test_iter_and_serialization_in_name_order() {
        let employees = vec![Employee::new("Zoe"), Employee::new("Al"), Employee::new("Mo")];
        let mut c = WorkdayCounter::new(&employees, 5);
        c.increment("Mo");

        let names: Vec<&str> = c.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Al", "Mo", "Zoe"]);

        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"max_days":5,"counts":{"Al":0,"Mo":1,"Zoe":0}}"#);
    }
}
