use thiserror::Error;

/// Raised by the argument guards in [`crate::inputs`].
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("parameter '{0}' is null or undefined")]
    NullParameter(String),
    #[error("parameter '{object}' has no value for key '{key}'")]
    MissingKey { object: String, key: String },
    #[error("{0}")]
    FailedRequirement(String),
}

impl ValidationError {
    /// Returns the error code string for this validation error.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NullParameter(_) => "NULL_PARAMETER",
            ValidationError::MissingKey { .. } => "MISSING_KEY",
            ValidationError::FailedRequirement(_) => "FAILED_REQUIREMENT",
        }
    }
}

/// Raised by the invariant guards in [`crate::state`].
#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("value '{0}' is null or undefined")]
    NullValue(String),
    #[error("expected {expected} but got {actual}")]
    NotEqual { expected: String, actual: String },
    #[error("{0}")]
    Failed(String),
}

impl StateError {
    /// Returns the error code string for this state error.
    pub fn code(&self) -> &'static str {
        match self {
            StateError::NullValue(_) => "NULL_VALUE",
            StateError::NotEqual { .. } => "NOT_EQUAL",
            StateError::Failed(_) => "FAILED",
        }
    }
}
