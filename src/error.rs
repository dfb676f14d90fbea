use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("No employees supplied")]
    NoEmployees,

    #[error("Invalid roster: {}", join_messages(.0))]
    InvalidRoster(Vec<ValidationError>),

    #[error("Employee name is required")]
    EmptyName,

    #[error("Employee '{0}' already exists")]
    DuplicateName(String),

    #[error("Employee not found: {0}")]
    UnknownEmployee(String),

    #[error("Invalid rank '{0}': expected 1, 2 or 3")]
    InvalidRank(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
