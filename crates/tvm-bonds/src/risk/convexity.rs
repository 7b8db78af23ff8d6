//! Convexity calculations.
//!
//! Convexity measures the curvature of the price-yield relationship,
//! capturing the second-order effect that duration misses.
//!
//! ## Formula
//!
//! ```text
//! C      = Σ t (t + 1) CF_t / (1 + i)^t / (P × (1 + i)² × m²)
//! C_cont = Σ t² CF_t e^(−r t) / P
//! ```

use tvm_core::{periodic_rate, CashFlow, CompoundingBasis};

use crate::pricing::{price, price_continuous};

/// Convexity in years² at an annual rate in percent.
///
/// Strictly positive for any non-negative, non-zero cash flow. Returns
/// `NaN` for a continuous basis.
///
/// # Example
///
/// ```rust
/// use tvm_bonds::{bond_cash_flow, convexity};
/// use tvm_core::{CompoundingBasis, TimeUnit};
///
/// let cf = bond_cash_flow(100.0, 10.0, CompoundingBasis::Annually, 3.0, TimeUnit::Years);
/// let cx = convexity(&cf, 9.0, CompoundingBasis::Annually);
/// assert!((cx - 8.932479).abs() < 1e-6);
/// ```
#[must_use]
pub fn convexity(cash_flow: &CashFlow, annual_rate_pct: f64, basis: CompoundingBasis) -> f64 {
    if basis.is_continuous() {
        return f64::NAN;
    }
    let m = f64::from(basis.periods_per_year());
    let growth = 1.0 + periodic_rate(annual_rate_pct / 100.0, basis.periods_per_year());
    let bond_price = price(cash_flow, annual_rate_pct, basis);

    let weighted: f64 = cash_flow
        .periods()
        .map(|(t, amount)| (1.0 + t) * t * amount / growth.powf(t))
        .sum();
    weighted / (bond_price * growth * growth) / (m * m)
}

/// Convexity under continuous compounding at an annual rate in percent.
#[must_use]
pub fn convexity_continuous(cash_flow: &CashFlow, annual_rate_pct: f64) -> f64 {
    let r = annual_rate_pct / 100.0;
    let bond_price = price_continuous(cash_flow, annual_rate_pct);
    let weighted: f64 = cash_flow
        .periods()
        .map(|(t, amount)| t * t * amount * (-r * t).exp())
        .sum();
    weighted / bond_price
}

/// Calculate price change including both duration and convexity effects.
///
/// # Formula
///
/// ```text
/// ΔP ≈ P × (−D_mod × Δy + ½ × C × Δy²)
/// ```
///
/// `yield_change` is a fraction (0.01 for 100 bp).
#[must_use]
pub fn price_change_with_convexity(
    mod_duration: f64,
    convexity: f64,
    price: f64,
    yield_change: f64,
) -> f64 {
    let duration_effect = -mod_duration * price * yield_change;
    let convexity_effect = 0.5 * convexity * price * yield_change.powi(2);
    duration_effect + convexity_effect
}
