//! Error types for the TVM core.
//!
//! Numeric formulas never return these: a bad rate or an unsupported unit
//! pair surfaces as `NaN`. Errors are reserved for structurally invalid
//! requests such as an unknown UI code or an empty cash flow.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Single-character compounding code that maps to no basis.
    #[error("Unknown compounding code '{code}' (expected one of a, s, q, m, w, d, c)")]
    UnknownCompoundingCode {
        /// The rejected code.
        code: char,
    },

    /// Single-character time-unit code that maps to no unit.
    #[error("Unknown time unit code '{code}' (expected one of y, s, q, m, w, d)")]
    UnknownTimeUnitCode {
        /// The rejected code.
        code: char,
    },

    /// A cash flow needs at least one payment.
    #[error("Cash flow must contain at least one payment")]
    EmptyCashFlow,

    /// Span that converts to more periods than a cash flow may hold.
    #[error("Term of {periods} periods exceeds the limit of {max}")]
    TooManyPeriods {
        /// Periods the span converts to.
        periods: f64,
        /// Largest supported period count.
        max: usize,
    },

    /// Day basis other than 360 or 365.
    #[error("Invalid day basis: {days} (expected 360 or 365)")]
    InvalidDayBasis {
        /// The rejected day count.
        days: u32,
    },
}

impl CoreError {
    /// Creates an unknown compounding code error.
    #[must_use]
    pub fn unknown_compounding(code: char) -> Self {
        Self::UnknownCompoundingCode { code }
    }

    /// Creates an unknown time unit code error.
    #[must_use]
    pub fn unknown_time_unit(code: char) -> Self {
        Self::UnknownTimeUnitCode { code }
    }

    /// Creates a too-many-periods error.
    #[must_use]
    pub fn too_many_periods(periods: f64, max: usize) -> Self {
        Self::TooManyPeriods { periods, max }
    }
}
