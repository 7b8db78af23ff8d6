//! CLI command implementations.

pub mod annuity;
pub mod bond;
pub mod config;
pub mod mortgage;
pub mod simple_interest;

pub use annuity::AnnuityArgs;
pub use bond::BondArgs;
pub use config::ConfigArgs;
pub use mortgage::MortgageArgs;
pub use simple_interest::SimpleInterestArgs;

use clap::Args;

use tvm_config::EngineConfig;
use tvm_core::{CompoundingBasis, TimeUnit};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
pub struct Context {
    /// Engine configuration.
    pub config: EngineConfig,
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and notices.
    pub quiet: bool,
}

impl Context {
    /// Resolves a compounding code against the configured day basis.
    pub fn basis(&self, code: char) -> anyhow::Result<CompoundingBasis> {
        let day_basis = self.config.periods.day_basis()?;
        Ok(CompoundingBasis::from_code(code, day_basis)?)
    }

    /// Resolves a time-unit code against the configured day basis.
    pub fn unit(&self, code: char) -> anyhow::Result<TimeUnit> {
        let day_basis = self.config.periods.day_basis()?;
        Ok(TimeUnit::from_code(code, day_basis)?)
    }
}

/// Length of a span.
#[derive(Args, Debug, Clone)]
pub struct TermArgs {
    /// Term length, counted in --unit
    #[arg(long)]
    pub term: f64,

    /// Time unit code: y, s, q, m, w, d
    #[arg(long, default_value_t = 'y')]
    pub unit: char,
}

/// Validates a strictly positive quantity.
pub fn validate_positive(name: &'static str, value: f64) -> CliResult<f64> {
    if !(value.is_finite() && value > 0.0) {
        return Err(CliError::NotPositive { name, value });
    }
    Ok(value)
}

/// Rejects a `NaN` or infinite result.
pub fn ensure_defined(metric: &str, value: f64, basis: CompoundingBasis) -> CliResult<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    let hint = if basis.is_continuous() {
        " (not available with continuous compounding)".to_string()
    } else {
        String::new()
    };
    Err(CliError::Undefined {
        metric: metric.to_string(),
        hint,
    })
}
