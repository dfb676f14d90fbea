//! Scheduler configuration.
//!
//! Limits and the random seed for a scheduling run, loadable from TOML.
//!
//! ```
//! use shift_roster::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::from_toml_str(r#"
//!     max_per_shift = 3
//!     random_seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.max_per_shift, 3);
//! assert_eq!(config.max_days_per_week, 5);
//! assert_eq!(config.random_seed, Some(42));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::DAY_COUNT;

/// Default number of employees per (day, shift) cell.
pub const MAX_PER_SHIFT: usize = 2;

/// Default weekly workday quota per employee.
pub const MAX_DAYS_PER_WEEK: usize = 5;

/// Scheduling limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Capacity of each cell.
    #[serde(default = "default_max_per_shift")]
    pub max_per_shift: usize,

    /// Weekly workday quota.
    #[serde(default = "default_max_days_per_week")]
    pub max_days_per_week: usize,

    /// Seed for the residual fill. `None` draws from the thread RNG.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_max_per_shift() -> usize {
    MAX_PER_SHIFT
}

fn default_max_days_per_week() -> usize {
    MAX_DAYS_PER_WEEK
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_per_shift: MAX_PER_SHIFT,
            max_days_per_week: MAX_DAYS_PER_WEEK,
            random_seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the cell capacity.
    pub fn with_max_per_shift(mut self, max_per_shift: usize) -> Self {
        self.max_per_shift = max_per_shift;
        self
    }

    /// Sets the weekly quota.
    pub fn with_max_days_per_week(mut self, max_days_per_week: usize) -> Self {
        self.max_days_per_week = max_days_per_week;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Rejects limits no run can satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.max_per_shift == 0 {
            return Err(ScheduleError::InvalidConfig(
                "max_per_shift must be at least 1".to_string(),
            ));
        }
        if self.max_days_per_week == 0 || self.max_days_per_week > DAY_COUNT {
            return Err(ScheduleError::InvalidConfig(format!(
                "max_days_per_week must be between 1 and {DAY_COUNT}, got {}",
                self.max_days_per_week
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::new();
        assert_eq!(config.max_per_shift, 2);
        assert_eq!(config.max_days_per_week, 5);
        assert_eq!(config.random_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = SchedulerConfig::new()
            .with_max_per_shift(1)
            .with_max_days_per_week(3)
            .with_random_seed(7);
        assert_eq!(config.max_per_shift, 1);
        assert_eq!(config.max_days_per_week, 3);
        assert_eq!(config.random_seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_bad_limits() {
        assert!(SchedulerConfig::new().with_max_per_shift(0).validate().is_err());
        assert!(SchedulerConfig::new().with_max_days_per_week(0).validate().is_err());
        let err = SchedulerConfig::new()
            .with_max_days_per_week(8)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = SchedulerConfig::from_toml_str("max_per_shift = \"two\"").unwrap_err();
        assert!(matches!(err, ScheduleError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_days_per_week = 4").unwrap();

        let config = SchedulerConfig::load(file.path()).unwrap();
        assert_eq!(config.max_days_per_week, 4);
        assert_eq!(config.max_per_shift, 2);
    }

    #[test]
    fn test_load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_per_shift = 0").unwrap();
        assert!(SchedulerConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SchedulerConfig::load("/nonexistent/roster.toml").unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}
