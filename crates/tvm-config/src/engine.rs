//! Engine configuration.
//!
//! One TOML document tunes the two root finders and the day-year used to
//! resolve `'d'` codes. Every field has a default, so an empty file is a
//! valid configuration:
//!
//! ```toml
//! [yield_solver]
//! tolerance = 1e-5
//! max_iterations = 200
//! max_expansions = 64
//!
//! [rate_solver]
//! tolerance = 1e-6
//! max_iterations = 100
//! lower_pct = 0.01
//! upper_pct = 100.0
//!
//! [periods]
//! daily_basis = 365
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use tvm_annuities::{Annuities, Mortgage, RateBracket, SimpleInterest, SimpleInterestBasis};
use tvm_bonds::{BondCalculator, YieldSolver};
use tvm_core::{DayBasis, PeriodConverter};
use tvm_math::solvers::{
    BisectionConfig, SolverConfig, DEFAULT_BISECTION_TOLERANCE, DEFAULT_MAX_BISECTIONS,
    DEFAULT_MAX_EXPANSIONS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// Yield solver
// =============================================================================

/// Settings of the bisection used for bond yields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSolverConfig {
    /// Price tolerance.
    #[serde(default = "default_yield_tolerance")]
    pub tolerance: f64,

    /// Maximum bisections.
    #[serde(default = "default_yield_max_iterations")]
    pub max_iterations: u32,

    /// Maximum doublings of the upper yield bound.
    #[serde(default = "default_max_expansions")]
    pub max_expansions: u32,
}

fn default_yield_tolerance() -> f64 {
    DEFAULT_BISECTION_TOLERANCE
}

fn default_yield_max_iterations() -> u32 {
    DEFAULT_MAX_BISECTIONS
}

fn default_max_expansions() -> u32 {
    DEFAULT_MAX_EXPANSIONS
}

impl Default for YieldSolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_yield_tolerance(),
            max_iterations: default_yield_max_iterations(),
            max_expansions: default_max_expansions(),
        }
    }
}

impl YieldSolverConfig {
    /// Converts to the solver's bisection configuration.
    #[must_use]
    pub fn to_bisection(&self) -> BisectionConfig {
        BisectionConfig::new(self.tolerance, self.max_iterations)
            .with_max_expansions(self.max_expansions)
    }
}

// =============================================================================
// Rate solver
// =============================================================================

/// Settings of the Newton-bisection solver used for implied annuity rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSolverConfig {
    /// Step tolerance.
    #[serde(default = "default_rate_tolerance")]
    pub tolerance: f64,

    /// Maximum iterations.
    #[serde(default = "default_rate_max_iterations")]
    pub max_iterations: u32,

    /// Default lower bound of the search, annual percent.
    #[serde(default = "default_lower_pct")]
    pub lower_pct: f64,

    /// Default upper bound of the search, annual percent.
    #[serde(default = "default_upper_pct")]
    pub upper_pct: f64,
}

fn default_rate_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_rate_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_lower_pct() -> f64 {
    tvm_annuities::DEFAULT_LOWER_PCT
}

fn default_upper_pct() -> f64 {
    tvm_annuities::DEFAULT_UPPER_PCT
}

impl Default for RateSolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_rate_tolerance(),
            max_iterations: default_rate_max_iterations(),
            lower_pct: default_lower_pct(),
            upper_pct: default_upper_pct(),
        }
    }
}

impl RateSolverConfig {
    /// Converts to the solver configuration.
    #[must_use]
    pub fn to_solver(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Default search bracket.
    #[must_use]
    pub fn bracket(&self) -> RateBracket {
        RateBracket::new(self.lower_pct, self.upper_pct)
    }
}

// =============================================================================
// Periods
// =============================================================================

/// Period conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodsConfig {
    /// Days in the year selected by `'d'` codes: 360 or 365.
    #[serde(default = "default_daily_basis")]
    pub daily_basis: u32,
}

fn default_daily_basis() -> u32 {
    365
}

impl Default for PeriodsConfig {
    fn default() -> Self {
        Self {
            daily_basis: default_daily_basis(),
        }
    }
}

impl PeriodsConfig {
    /// Resolves the configured day basis.
    pub fn day_basis(&self) -> ConfigResult<DayBasis> {
        DayBasis::from_days(self.daily_basis).map_err(|e| ConfigError::Validation {
            field: "periods.daily_basis".to_string(),
            message: e.to_string(),
        })
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Bond yield bisection.
    #[serde(default)]
    pub yield_solver: YieldSolverConfig,

    /// Implied-rate solver.
    #[serde(default)]
    pub rate_solver: RateSolverConfig,

    /// Period conversion.
    #[serde(default)]
    pub periods: PeriodsConfig,
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tvm_config::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("[periods]\ndaily_basis = 360\n").unwrap();
    /// assert_eq!(config.periods.daily_basis, 360);
    /// assert_eq!(config.yield_solver.max_iterations, 200);
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to a TOML file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))
    }

    /// Period converter for the configured day basis.
    pub fn period_converter(&self) -> ConfigResult<PeriodConverter> {
        Ok(PeriodConverter::new(self.periods.day_basis()?))
    }

    /// Bond calculator with the configured converter and yield solver.
    pub fn bond_calculator(&self) -> ConfigResult<BondCalculator> {
        Ok(BondCalculator::new(
            self.period_converter()?,
            YieldSolver::from_config(self.yield_solver.to_bisection()),
        ))
    }

    /// Annuity calculator with the configured converter and rate solver.
    pub fn annuities(&self) -> ConfigResult<Annuities> {
        Ok(Annuities::new(
            self.period_converter()?,
            self.rate_solver.to_solver(),
        ))
    }

    /// Simple interest calculator on `basis`.
    pub fn simple_interest(&self, basis: SimpleInterestBasis) -> ConfigResult<SimpleInterest> {
        Ok(SimpleInterest::new(basis, self.period_converter()?))
    }

    /// Mortgage calculator with the configured converter.
    pub fn mortgage(&self) -> ConfigResult<Mortgage> {
        Ok(Mortgage::new(self.period_converter()?))
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        check_tolerance(&mut errors, "yield_solver.tolerance", self.yield_solver.tolerance);
        check_iterations(
            &mut errors,
            "yield_solver.max_iterations",
            self.yield_solver.max_iterations,
        );

        check_tolerance(&mut errors, "rate_solver.tolerance", self.rate_solver.tolerance);
        check_iterations(
            &mut errors,
            "rate_solver.max_iterations",
            self.rate_solver.max_iterations,
        );

        let (lower, upper) = (self.rate_solver.lower_pct, self.rate_solver.upper_pct);
        if !(lower.is_finite() && lower > 0.0) {
            errors.push(ValidationError::with_rule(
                "rate_solver.lower_pct",
                format!("must be a positive rate, got {lower}"),
                "positive",
            ));
        }
        if !(upper.is_finite() && upper > lower) {
            errors.push(ValidationError::with_rule(
                "rate_solver.upper_pct",
                format!("must exceed lower_pct ({lower}), got {upper}"),
                "ordered_bracket",
            ));
        }

        if !matches!(self.periods.daily_basis, 360 | 365) {
            errors.push(ValidationError::with_rule(
                "periods.daily_basis",
                format!("must be 360 or 365, got {}", self.periods.daily_basis),
                "day_basis",
            ));
        }

        errors
    }
}

fn check_tolerance(errors: &mut Vec<ValidationError>, field: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(ValidationError::with_rule(
            field,
            format!("must be positive, got {value}"),
            "positive",
        ));
    }
}

fn check_iterations(errors: &mut Vec<ValidationError>, field: &str, value: u32) {
    if value == 0 {
        errors.push(ValidationError::with_rule(
            field,
            "must allow at least one iteration",
            "non_zero",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.yield_solver.tolerance, 1e-5);
        assert_eq!(config.yield_solver.max_iterations, 200);
        assert_eq!(config.rate_solver.tolerance, 1e-6);
        assert_eq!(config.rate_solver.max_iterations, 100);
        assert_eq!(config.rate_solver.bracket(), RateBracket::default());
        assert_eq!(config.periods.daily_basis, 365);
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [rate_solver]
            upper_pct = 50.0
            "#,
        )
        .unwrap();
        assert_eq!(config.rate_solver.upper_pct, 50.0);
        assert_eq!(config.rate_solver.lower_pct, 0.01);
        assert_eq!(config.yield_solver, YieldSolverConfig::default());
    }

    #[test]
    fn test_conversions() {
        let config = EngineConfig::from_toml_str(
            r#"
            [yield_solver]
            tolerance = 1e-8
            max_iterations = 500

            [periods]
            daily_basis = 360
            "#,
        )
        .unwrap();

        let bisection = config.yield_solver.to_bisection();
        assert_eq!(bisection.tolerance, 1e-8);
        assert_eq!(bisection.max_iterations, 500);
        assert_eq!(bisection.max_expansions, 64);

        let solver = config.rate_solver.to_solver();
        assert_eq!(solver, SolverConfig::default());

        assert_eq!(config.periods.day_basis().unwrap(), DayBasis::Days360);
        let calc = config.bond_calculator().unwrap();
        assert_eq!(calc.periods().day_basis(), DayBasis::Days360);
        assert_eq!(calc.solver().config().max_iterations, 500);
        assert_eq!(config.annuities().unwrap().solver().tolerance, 1e-6);
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let config = EngineConfig {
            yield_solver: YieldSolverConfig {
                tolerance: 0.0,
                ..YieldSolverConfig::default()
            },
            rate_solver: RateSolverConfig {
                max_iterations: 0,
                lower_pct: 20.0,
                upper_pct: 10.0,
                ..RateSolverConfig::default()
            },
            periods: PeriodsConfig { daily_basis: 364 },
        };
        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "yield_solver.tolerance",
                "rate_solver.max_iterations",
                "rate_solver.upper_pct",
                "periods.daily_basis",
            ]
        );
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(ref e)) if e.len() == 4
        ));
        assert!(config.period_converter().is_err());
    }

    #[test]
    fn test_single_problem_is_validation_error() {
        let err = EngineConfig::from_toml_str("[periods]\ndaily_basis = 366\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation { ref field, .. } if field == "periods.daily_basis"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml_str("[yield_solver\n").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));

        let err = EngineConfig::from_toml_str("[yield_solver]\ntolerance = \"tight\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = EngineConfig::default();
        config.rate_solver.upper_pct = 40.0;
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[rate_solver]"));
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}
