//! Custom error types for budget-pacer
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget-pacer operations
#[derive(Error, Debug)]
pub enum PacerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A write-path input was rejected; names the field and the broken constraint
    #[error("Invalid {field}: {constraint}")]
    Validation {
        field: &'static str,
        constraint: String,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed calendar input (month outside 1..=12, day outside the month)
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A month with no working days cannot carry a daily target
    #[error("Month {year}-{month:02} has no working days")]
    DegenerateMonth { year: i32, month: u32 },

    /// Negative or unparseable monetary input
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PacerError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, constraint: impl Into<String>) -> Self {
        Self::Validation {
            field,
            constraint: constraint.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for saving goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Saving goal",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for income entries
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<std::io::Error> for PacerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<crate::models::MoneyParseError> for PacerError {
    fn from(err: crate::models::MoneyParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

impl From<serde_json::Error> for PacerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-pacer operations
pub type PacerResult<T> = Result<T, PacerError>;
