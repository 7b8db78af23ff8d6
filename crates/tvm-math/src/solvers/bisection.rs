//! Bracket-expanding bisection for monotonically decreasing functions.

use log::{debug, trace, warn};

use crate::solvers::{BisectionConfig, SolverResult};

/// Finds `x >= 0` with `f(x) = target` for a decreasing `f`.
///
/// The search starts from the bracket `[0, 1]` and doubles the upper bound
/// while `f(top) > target`, which for a decreasing `f` and a positive target
/// leaves the solution inside `[0, top]`. It then bisects from the midpoint,
/// replacing the bound on the same side of the target as the midpoint.
///
/// The iteration cap is not an error: if `config.max_iterations` bisections
/// pass without `|f(x) - target| < tolerance`, the latest midpoint is
/// returned and the shortfall is only visible through
/// [`SolverResult::residual`]. A non-positive or non-finite target, or an
/// objective that evaluates to `NaN`, yields a `NaN` root.
///
/// # Example
///
/// ```rust
/// use tvm_math::solvers::{decreasing_bisection, BisectionConfig};
///
/// // Price of a 5-period zero coupon at x percent per period
/// let price = |x: f64| 100.0 / (1.0 + x / 100.0).powi(5);
///
/// let result = decreasing_bisection(price, 74.72581728, &BisectionConfig::default());
/// assert!((result.root - 6.0).abs() < 1e-5);
/// ```
pub fn decreasing_bisection<F>(f: F, target: f64, config: &BisectionConfig) -> SolverResult
where
    F: Fn(f64) -> f64,
{
    if !target.is_finite() || target <= 0.0 {
        debug!("bisection target {target} is not a positive finite value");
        return SolverResult {
            root: f64::NAN,
            iterations: 0,
            residual: f64::NAN,
        };
    }

    let mut bottom = 0.0;
    let mut top = 1.0;
    let mut expansions = 0;
    while f(top) > target {
        if expansions >= config.max_expansions {
            warn!(
                "bisection upper bound still above target after {} doublings (top = {top})",
                config.max_expansions
            );
            break;
        }
        top *= 2.0;
        expansions += 1;
    }
    trace!("bisection bracket [0, {top}] after {expansions} doublings");

    let mut root = 0.5 * top;
    for iteration in 0..config.max_iterations {
        let diff = f(root) - target;
        if diff.is_nan() {
            debug!("bisection objective is NaN at {root}");
            return SolverResult {
                root: f64::NAN,
                iterations: iteration + 1,
                residual: f64::NAN,
            };
        }
        if diff.abs() < config.tolerance {
            return SolverResult {
                root,
                iterations: iteration + 1,
                residual: diff,
            };
        }
        if diff > 0.0 {
            bottom = root;
        } else {
            top = root;
        }
        root = 0.5 * (top + bottom);
    }

    let residual = f(root) - target;
    debug!(
        "bisection exhausted {} iterations, returning {root} (residual {residual:.2e})",
        config.max_iterations
    );
    SolverResult {
        root,
        iterations: config.max_iterations,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn zero_coupon(x: f64) -> f64 {
        100.0 / (1.0 + x / 100.0).powi(5)
    }

    #[test]
    fn test_root_inside_initial_bracket() {
        // 0.5% per period is inside [0, 1]
        let target = zero_coupon(0.5);
        let result = decreasing_bisection(zero_coupon, target, &BisectionConfig::default());

        assert!(result.within(1e-5));
        assert_relative_eq!(result.root, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_bracket_expansion() {
        // 150% forces the upper bound through 2, 4, ..., 256
        let target = zero_coupon(150.0);
        let result = decreasing_bisection(zero_coupon, target, &BisectionConfig::default());

        assert!(result.within(1e-5));
        assert_relative_eq!(result.root, 150.0, epsilon = 1e-3);
    }

    #[test]
    fn test_exhaustion_returns_last_estimate() {
        let target = zero_coupon(5.3);
        let config = BisectionConfig::default().with_max_iterations(3);
        let result = decreasing_bisection(zero_coupon, target, &config);

        // Midpoints 4, 6, 5, then 5.5 is returned unevaluated against the cap
        assert_eq!(result.iterations, 3);
        assert_relative_eq!(result.root, 5.5);
        assert!(!result.within(1e-5));
    }

    #[test]
    fn test_zero_tolerance_never_errors() {
        let target = zero_coupon(6.0);
        let config = BisectionConfig::default().with_tolerance(0.0);
        let result = decreasing_bisection(zero_coupon, target, &config);

        assert_eq!(result.iterations, 200);
        assert_relative_eq!(result.root, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_target_is_nan() {
        let config = BisectionConfig::default();
        assert!(decreasing_bisection(zero_coupon, 0.0, &config).root.is_nan());
        assert!(decreasing_bisection(zero_coupon, -5.0, &config).root.is_nan());
        assert!(decreasing_bisection(zero_coupon, f64::NAN, &config).root.is_nan());
    }

    #[test]
    fn test_nan_objective_is_nan() {
        let result = decreasing_bisection(|_| f64::NAN, 10.0, &BisectionConfig::default());
        assert!(result.root.is_nan());
    }

    #[test]
    fn test_expansion_cap() {
        // Never falls below the target; the cap stops the doubling
        let config = BisectionConfig::default()
            .with_max_expansions(4)
            .with_max_iterations(10);
        let result = decreasing_bisection(|_| 100.0, 50.0, &config);

        assert_eq!(result.iterations, 10);
        assert!(result.root <= 16.0);
    }

    proptest! {
        #[test]
        fn prop_recovers_rate(rate in 0.01f64..150.0) {
            let target = zero_coupon(rate);
            let result = decreasing_bisection(zero_coupon, target, &BisectionConfig::default());
            prop_assert!(result.within(1e-5));
        }
    }
}
