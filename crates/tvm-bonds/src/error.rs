//! Error types for bond analytics.

use thiserror::Error;
use tvm_core::CoreError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while setting up a bond calculation.
///
/// Formula evaluation itself never fails; unsupported rate and basis
/// combinations produce `NaN`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond terms.
    #[error("Invalid bond terms: {reason}")]
    InvalidTerms {
        /// Description of the problem.
        reason: String,
    },

    /// Invalid market price.
    #[error("Invalid price: {price} (must be positive and finite)")]
    InvalidPrice {
        /// The rejected price.
        price: f64,
    },

    /// Error from the core types.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(price: f64) -> Self {
        Self::InvalidPrice { price }
    }
}
