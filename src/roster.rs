//! Employee roster with JSON persistence.
//!
//! Holds the employee list in insertion order and keeps names unique
//! ignoring case. Stored as a plain JSON array of employees:
//!
//! ```json
//! [
//!   { "name": "Alice", "preferences": { "Monday": { "Morning": 1, ... } } }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, ScheduleError};
use crate::models::{name_key, Employee};

/// Ordered employee list with unique names.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Employee, Rank};
/// use shift_roster::roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.add(Employee::new("  Alice ").with_uniform_rank(Rank::FIRST)).unwrap();
/// assert!(roster.add(Employee::new("alice")).is_err());
///
/// roster.rename("Alice", "Alicia").unwrap();
/// assert!(roster.get("Alicia").is_some());
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee, trimming the name.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyName`] for a blank name and
    /// [`ScheduleError::DuplicateName`] if the name is taken ignoring case.
    pub fn add(&mut self, mut employee: Employee) -> Result<()> {
        let name = employee.name.trim().to_string();
        if name.is_empty() {
            return Err(ScheduleError::EmptyName);
        }
        if self.employees.iter().any(|e| e.has_name(&name)) {
            return Err(ScheduleError::DuplicateName(name));
        }

        debug!(event = "employee_added", employee = %name);
        employee.name = name;
        self.employees.push(employee);
        Ok(())
    }

    /// Renames the employee called exactly `old`.
    ///
    /// The new name is trimmed and must not clash with any other employee;
    /// changing only the casing of one's own name is allowed.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        let new = new.trim();
        if new.is_empty() {
            return Err(ScheduleError::EmptyName);
        }
        let pos = self
            .employees
            .iter()
            .position(|e| e.name == old)
            .ok_or_else(|| ScheduleError::UnknownEmployee(old.to_string()))?;
        let key = name_key(new);
        if self
            .employees
            .iter()
            .enumerate()
            .any(|(i, e)| i != pos && name_key(&e.name) == key)
        {
            return Err(ScheduleError::DuplicateName(new.to_string()));
        }

        debug!(event = "employee_renamed", from = %old, to = %new);
        self.employees[pos].name = new.to_string();
        Ok(())
    }

    /// Removes and returns the employee called exactly `name`.
    pub fn remove(&mut self, name: &str) -> Result<Employee> {
        let pos = self
            .employees
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| ScheduleError::UnknownEmployee(name.to_string()))?;
        debug!(event = "employee_removed", employee = %name);
        Ok(self.employees.remove(pos))
    }

    /// Employee called exactly `name`.
    pub fn get(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Iterates employees in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Employees as a slice, ready for scheduling.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Parses a roster from JSON and re-checks names.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let stored: Vec<Employee> = serde_json::from_str(s)?;
        let mut roster = Self::new();
        for employee in stored {
            roster.add(employee)?;
        }
        Ok(roster)
    }

    /// Serializes the roster as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a roster from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let roster = Self::from_json_str(&contents)?;
        info!(event = "roster_loaded", path = %path.display(), employees = roster.len());
        Ok(roster)
    }

    /// Loads a roster, or returns an empty one if the file does not exist.
    pub fn load_json_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load_json(path)
    }

    /// Writes the roster to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_string()?)?;
        info!(event = "roster_saved", path = %path.display(), employees = self.len());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
