//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A quantity that must be positive was not.
    #[error("Invalid {name}: {value}. Must be positive.")]
    NotPositive {
        /// Option name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The analytics returned no number for these inputs.
    #[error("{metric} is undefined for these inputs{hint}")]
    Undefined {
        /// Metric that came back as NaN.
        metric: String,
        /// Extra context, empty or starting with a separator.
        hint: String,
    },

    /// Missing required argument combination.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
