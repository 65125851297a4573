use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the scheduling entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("invalid scheduling input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("unknown scheduling algorithm '{0}'")]
    UnknownAlgorithm(String),
}

impl ScheduleError {
    /// The individual validation failures, empty for non-validation errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidInput(errors) => errors,
            ScheduleError::UnknownAlgorithm(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
