//! Root-finding algorithms.
//!
//! Two independent solvers with deliberately different failure policies:
//!
//! - [`decreasing_bisection`]: bracket-expanding bisection for a target
//!   value of a monotonically decreasing function. Used for bond yields.
//!   It always returns an estimate; exhausting its iterations is not an
//!   error.
//! - [`newton_bisection`]: safeguarded Newton-Raphson on a caller-supplied
//!   bracket, falling back to bisection whenever the Newton step leaves the
//!   bracket or stalls. Used for annuity implied rates. A bad bracket and
//!   non-convergence are both reported as errors.
//!
//! # Choosing a Solver
//!
//! | Solver | Needs | Converges | On failure |
//! |--------|-------|-----------|------------|
//! | Decreasing bisection | Monotone f, target | Linear | Last estimate |
//! | Newton-bisection | f and f', sign change | Quadratic near root | `MathError` |
//!
//! # Example: Implied Rate
//!
//! ```rust
//! use tvm_math::solvers::{newton_bisection, SolverConfig};
//!
//! // Solve x^2 - 2 = 0 on [1, 2]
//! let result = newton_bisection(
//!     |x: f64| (x * x - 2.0, 2.0 * x),
//!     1.0,
//!     2.0,
//!     &SolverConfig::default(),
//! )
//! .unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```

mod bisection;
mod newton_bisection;

pub use bisection::decreasing_bisection;
pub use newton_bisection::newton_bisection;

/// Default tolerance for the Newton-bisection solver.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for the Newton-bisection solver.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default price tolerance for the yield bisection.
pub const DEFAULT_BISECTION_TOLERANCE: f64 = 1e-5;

/// Default maximum bisections for the yield bisection.
pub const DEFAULT_MAX_BISECTIONS: u32 = 200;

/// Default cap on upper-bound doublings before bisection starts.
pub const DEFAULT_MAX_EXPANSIONS: u32 = 64;

/// Configuration for the Newton-bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Step size below which the iterate is accepted.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Configuration for the decreasing-function bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig {
    /// Accepts the midpoint once `|f(mid) - target|` falls below this.
    pub tolerance: f64,
    /// Maximum number of bisections.
    pub max_iterations: u32,
    /// Maximum number of upper-bound doublings.
    pub max_expansions: u32,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_BISECTION_TOLERANCE,
            max_iterations: DEFAULT_MAX_BISECTIONS,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl BisectionConfig {
    /// Creates a new bisection configuration with the default expansion cap.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum bisections.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the maximum upper-bound doublings.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root, less any target).
    pub residual: f64,
}

impl SolverResult {
    /// Returns true if the residual is within `tolerance`.
    #[must_use]
    pub fn within(&self, tolerance: f64) -> bool {
        self.residual.abs() < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_bisection_config_defaults() {
        let config = BisectionConfig::default();
        assert!((config.tolerance - 1e-5).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.max_expansions, 64);

        let config = BisectionConfig::new(1e-8, 300).with_max_expansions(10);
        assert_eq!(config.max_iterations, 300);
        assert_eq!(config.max_expansions, 10);
    }

    #[test]
    fn test_result_within() {
        let result = SolverResult {
            root: 1.0,
            iterations: 3,
            residual: -1e-7,
        };
        assert!(result.within(1e-6));
        assert!(!result.within(1e-8));
    }
}
