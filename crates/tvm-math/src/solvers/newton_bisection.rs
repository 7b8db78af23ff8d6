//! Safeguarded Newton-Raphson with bisection fallback.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a root of `f` inside `[lo, hi]` using Newton steps kept inside the
/// bracket.
///
/// `f` returns `(f(x), f'(x))` in one call so that shared subexpressions
/// are computed once.
///
/// # Strategy
///
/// 1. Reject the bracket unless `f(lo)` and `f(hi)` differ in sign; an
///    endpoint with `f == 0` is returned immediately
/// 2. Orient the bracket so `f(low) < 0` and start from the midpoint
/// 3. Bisect when the Newton step would leave the bracket or when the
///    previous step did not shrink fast enough (`|2f| > |dx_old * f'|`),
///    otherwise take the Newton step
/// 4. Accept the iterate once the step is below `config.tolerance` or the
///    iterate stops moving; otherwise evaluate `f` and shrink the bracket
///
/// Unlike [`decreasing_bisection`](crate::solvers::decreasing_bisection),
/// exceeding `config.max_iterations` is reported as
/// [`MathError::ConvergenceFailed`].
///
/// # Example
///
/// ```rust
/// use tvm_math::solvers::{newton_bisection, SolverConfig};
///
/// // x^3 - x - 2 on [1, 2]
/// let result = newton_bisection(
///     |x: f64| (x * x * x - x - 2.0, 3.0 * x * x - 1.0),
///     1.0,
///     2.0,
///     &SolverConfig::default().with_tolerance(1e-12),
/// )
/// .unwrap();
/// assert!((result.root - 1.5213797068045676).abs() < 1e-10);
/// ```
pub fn newton_bisection<F>(
    mut f: F,
    lo: f64,
    hi: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: FnMut(f64) -> (f64, f64),
{
    let (f_lo, _) = f(lo);
    let (f_hi, _) = f(hi);

    if f_lo.is_nan() || f_hi.is_nan() || (f_lo > 0.0 && f_hi > 0.0) || (f_lo < 0.0 && f_hi < 0.0)
    {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    // Handle case where endpoint is the root
    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: 0.0,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: 0.0,
        });
    }

    let (mut x_low, mut x_high) = if f_lo < 0.0 { (lo, hi) } else { (hi, lo) };

    let mut root = 0.5 * (lo + hi);
    let mut dx_old = (hi - lo).abs();
    let mut dx = dx_old;
    let (mut fx, mut dfx) = f(root);

    for iteration in 1..=config.max_iterations {
        let leaves_bracket = ((root - x_high) * dfx - fx) * ((root - x_low) * dfx - fx) > 0.0;
        let too_slow = (2.0 * fx).abs() > (dx_old * dfx).abs();

        if leaves_bracket || too_slow {
            dx_old = dx;
            dx = 0.5 * (x_high - x_low);
            root = x_low + dx;
            trace!("iteration {iteration}: bisection to {root}");
            if x_low == root {
                return Ok(SolverResult {
                    root,
                    iterations: iteration,
                    residual: f(root).0,
                });
            }
        } else {
            dx_old = dx;
            dx = fx / dfx;
            let previous = root;
            root -= dx;
            trace!("iteration {iteration}: newton step to {root}");
            if previous == root {
                return Ok(SolverResult {
                    root,
                    iterations: iteration,
                    residual: fx,
                });
            }
        }

        if !root.is_finite() {
            return Err(MathError::invalid_input(format!(
                "iterate became non-finite after {iteration} iterations"
            )));
        }

        if dx.abs() < config.tolerance {
            return Ok(SolverResult {
                root,
                iterations: iteration,
                residual: f(root).0,
            });
        }

        (fx, dfx) = f(root);
        if fx < 0.0 {
            x_low = root;
        } else {
            x_high = root;
        }
    }

    debug!(
        "newton-bisection did not converge in {} iterations (last iterate {root})",
        config.max_iterations
    );
    Err(MathError::convergence_failed(config.max_iterations, fx.abs()))
}
