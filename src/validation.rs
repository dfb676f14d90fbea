//! Input validation for roster scheduling.
//!
//! Checks structural integrity of the employee list before a run.
//! Detects:
//! - An empty roster
//! - Blank names
//! - Duplicate names (ignoring case and surrounding whitespace)
//! - Missing preference ranks

use crate::models::{name_key, Employee};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No employees supplied.
    EmptyRoster,
    /// A name is blank after trimming.
    EmptyName,
    /// Two employees share a name ignoring case.
    DuplicateName,
    /// An employee lacks a rank for at least one (day, shift) cell.
    MissingPreference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates an employee list for scheduling.
///
/// Checks:
/// 1. At least one employee
/// 2. No blank names
/// 3. No duplicate names (case-insensitive)
/// 4. Every employee ranks all 21 (day, shift) cells
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(employees: &[Employee]) -> ValidationResult {
    if employees.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "No employees supplied",
        )]);
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for employee in employees {
        let key = name_key(&employee.name);
        if key.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Employee name is required",
            ));
        } else if !seen.insert(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", employee.name),
            ));
        }

        let missing = employee.missing_preferences();
        if let Some(&(day, shift)) = missing.first() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPreference,
                format!(
                    "Employee '{}' is missing {} preference(s), first at {day} {shift}",
                    employee.name,
                    missing.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
