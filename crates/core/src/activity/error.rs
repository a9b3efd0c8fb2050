use thiserror::Error;

/// Errors raised while validating activity input before it reaches the API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Unknown sport type: {0}")]
    UnknownSportType(String),
    #[error("Could not parse start date: {0}")]
    InvalidStartDate(String),
}
