//! Error types for annuity calculations.

use thiserror::Error;
use tvm_core::CoreError;
use tvm_math::MathError;

/// A specialized Result type for annuity operations.
pub type AnnuityResult<T> = Result<T, AnnuityError>;

/// Errors that can occur in annuity calculations.
///
/// Closed-form formulas never fail; only implied-rate solving and
/// structurally invalid requests do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnuityError {
    /// Invalid input for an annuity problem.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// The implied-rate solver failed.
    #[error("Implied rate: {0}")]
    Solver(#[from] MathError),

    /// Error from the core types.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AnnuityError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true if the rate bracket did not contain a root.
    #[must_use]
    pub fn is_no_bracket(&self) -> bool {
        matches!(self, Self::Solver(e) if e.is_invalid_bracket())
    }
}
