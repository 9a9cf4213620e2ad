//! Custom error types for tally-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::TransactionKind;

/// Validation failures for caller-supplied transaction input
///
/// These are always recoverable: the caller can retry the operation with
/// corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount was not a usable number (NaN or infinite)
    #[error("The amount must be a number")]
    NonNumericAmount,

    /// Amount was zero or negative after rounding to cents
    #[error("The amount must be a positive number")]
    NonPositiveAmount,

    /// Category label was empty or whitespace-only
    #[error("The category must not be empty")]
    EmptyCategory,

    /// Transaction kind did not resemble either accepted value
    #[error("The transaction type must be 'Income' or 'Expense'")]
    InvalidKind,

    /// Transaction kind was rejected but resembles one of the accepted values
    #[error("The transaction type must be 'Income' or 'Expense'. Did you mean '{suggestion}'?")]
    AmbiguousKind { suggestion: TransactionKind },
}

/// The main error type for tally-cli operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// The backing file exists but could not be parsed at startup
    #[error("Failed to load ledger: {0}")]
    Load(String),

    /// Bad arguments to `add` or a filter query
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Appending to the backing file failed; the in-memory table is unchanged
    #[error("I/O error: {0}")]
    Io(String),
}

impl TallyError {
    /// Create a load error for a specific file
    pub fn load(path: &std::path::Path, detail: impl std::fmt::Display) -> Self {
        Self::Load(format!("{}: {}", path.display(), detail))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for tally-cli operations
pub type TallyResult<T> = Result<T, TallyError>;
