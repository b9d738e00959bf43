//! Error types for parameter validation, position parsing and budgeted search

use std::fmt;

/// Main error type for all tour operations
///
/// Solvers never return this for a failed tour: a missing tour is reported through
/// [`TourOutcome::success`](crate::solver::TourOutcome). Errors cover misuse of the
/// surrounding machinery instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Textual board coordinates could not be parsed
    InvalidPosition {
        /// Raw input that was rejected
        input: String,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Backtracking search entered more positions than its node budget allows
    ///
    /// The search is abandoned part way, so nothing is known about whether a
    /// closed tour exists from the requested start.
    SearchBudgetExhausted {
        /// Budget that was exceeded
        budget: u64,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPosition { input, reason } => {
                write!(f, "Invalid position '{input}': {reason}")
            }
            Self::SearchBudgetExhausted { budget } => {
                write!(f, "Search abandoned after exceeding node budget of {budget}")
            }
        }
    }
}

impl std::error::Error for TourError {}

/// Convenience type alias for tour results
pub type Result<T> = std::result::Result<T, TourError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TourError {
    TourError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid position error
pub fn invalid_position(input: &str, reason: &impl ToString) -> TourError {
    TourError::InvalidPosition {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
