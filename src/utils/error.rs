use crate::domain::model::Emergency;
use thiserror::Error;

/// Why a candidate string is not an assignable code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("expected 4 characters, found {found}")]
    Length { found: usize },

    #[error("character {found:?} at position {index} is not an octal digit")]
    Digit { index: usize, found: char },

    #[error("{0} is reserved")]
    Reserved(Emergency),
}

#[derive(Error, Debug)]
pub enum SquawkError {
    #[error("Invalid squawk code: {0}")]
    InvalidCode(#[from] Rejection),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SquawkError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SquawkError::InvalidCode(rejection) => format!("Code rejected: {}", rejection),
            SquawkError::IoError(e) => format!("Could not read or write a file: {}", e),
            SquawkError::SerializationError(e) => format!("Could not encode output: {}", e),
            SquawkError::ConfigError { message } => format!("Configuration problem: {}", message),
            SquawkError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// Process exit code for this error when it reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            SquawkError::InvalidCode(_) => 1,
            SquawkError::ConfigError { .. } | SquawkError::InvalidConfigValueError { .. } => 2,
            SquawkError::IoError(_) | SquawkError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SquawkError>;
