//! Macaulay and modified duration.
//!
//! ## Formula
//!
//! ```text
//! D_periods = Σ t × CF_t / (1 + i)^t / P        (i = periodic rate)
//! D_mac     = D_periods / m                      (years, m periods per year)
//! D_mod     = D_mac / (1 + i)
//! D_cont    = Σ t × CF_t × e^(−r t) / P
//! ```
//!
//! A single-payment cash flow has a duration equal to its period count;
//! any earlier payment pulls the duration below it.

use tvm_core::{CashFlow, CompoundingBasis};

use crate::yields::{yield_to_maturity, yield_to_maturity_continuous};

/// Present-value-weighted average period of `cash_flow`, in periods.
///
/// `periodic_rate_pct` is the per-period discount rate in percent.
#[must_use]
pub fn duration(cash_flow: &CashFlow, periodic_rate_pct: f64, price: f64) -> f64 {
    let growth = 1.0 + periodic_rate_pct / 100.0;
    let weighted: f64 = cash_flow
        .periods()
        .map(|(t, amount)| t * amount / growth.powf(t))
        .sum();
    weighted / price
}

/// Duration in years at an annual rate in percent.
///
/// Returns `NaN` for a continuous basis.
#[must_use]
pub fn duration_at_rate(
    cash_flow: &CashFlow,
    annual_rate_pct: f64,
    basis: CompoundingBasis,
    price: f64,
) -> f64 {
    if basis.is_continuous() {
        return f64::NAN;
    }
    let m = f64::from(basis.periods_per_year());
    duration(cash_flow, annual_rate_pct / m, price) / m
}

/// Macaulay duration in years, at the yield implied by `price`.
///
/// # Example
///
/// ```rust
/// use tvm_bonds::{bond_cash_flow, macaulay_duration, price};
/// use tvm_core::{CompoundingBasis, TimeUnit};
///
/// let cf = bond_cash_flow(100.0, 10.0, CompoundingBasis::Annually, 3.0, TimeUnit::Years);
/// let p = price(&cf, 9.0, CompoundingBasis::Annually);
/// let d = macaulay_duration(&cf, p, CompoundingBasis::Annually);
/// assert!((d - 2.738954).abs() < 1e-5);
/// ```
#[must_use]
pub fn macaulay_duration(cash_flow: &CashFlow, price: f64, basis: CompoundingBasis) -> f64 {
    let ytm = yield_to_maturity(cash_flow, price, basis);
    duration_at_rate(cash_flow, ytm, basis, price)
}

/// Modified duration in years at an annual rate in percent.
#[must_use]
pub fn modified_duration_at_rate(
    cash_flow: &CashFlow,
    annual_rate_pct: f64,
    basis: CompoundingBasis,
    price: f64,
) -> f64 {
    let periodic = annual_rate_pct / f64::from(basis.periods_per_year());
    duration_at_rate(cash_flow, annual_rate_pct, basis, price) / (1.0 + periodic / 100.0)
}

/// Modified duration in years, at the yield implied by `price`.
#[must_use]
pub fn modified_duration(cash_flow: &CashFlow, price: f64, basis: CompoundingBasis) -> f64 {
    let ytm = yield_to_maturity(cash_flow, price, basis);
    modified_duration_at_rate(cash_flow, ytm, basis, price)
}

/// Duration under continuous compounding at an annual rate in percent.
///
/// Under continuous compounding Macaulay and modified duration coincide.
#[must_use]
pub fn duration_continuous(cash_flow: &CashFlow, annual_rate_pct: f64, price: f64) -> f64 {
    let r = annual_rate_pct / 100.0;
    let weighted: f64 = cash_flow
        .periods()
        .map(|(t, amount)| (-r * t).exp() * t * amount)
        .sum();
    weighted / price
}

/// Continuous duration at the continuous yield implied by `price`.
#[must_use]
pub fn macaulay_duration_continuous(cash_flow: &CashFlow, price: f64) -> f64 {
    let ytm = yield_to_maturity_continuous(cash_flow, price);
    duration_continuous(cash_flow, ytm, price)
}
