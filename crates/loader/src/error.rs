use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read orders: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid {field} '{value}': {reason}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Line {line}: {source}")]
    Domain {
        line: usize,
        #[source]
        source: CoreError,
    },
}

impl LoadError {
    /// The 1-based input line the error refers to, if it concerns a single row.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::FieldCount { line, .. }
            | LoadError::InvalidField { line, .. }
            | LoadError::Domain { line, .. } => Some(*line),
            LoadError::InvalidArgument(_) | LoadError::Io(_) => None,
        }
    }
}
