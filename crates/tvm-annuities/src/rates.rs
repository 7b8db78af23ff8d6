//! Interest rate conversions and averages.
//!
//! Rates in and out are fractions. A nominal rate `r` compounded `m` times
//! a year has the effective annual rate
//!
//! ```text
//! EAR = (1 + r / m)^m − 1        r = m × ((1 + EAR)^(1/m) − 1)
//! EAR = e^r − 1                  r = ln(1 + EAR)          (continuous)
//! ```

use tvm_core::CompoundingBasis;

/// Effective annual rate of a nominal rate.
///
/// # Example
///
/// ```rust
/// use tvm_annuities::nominal_to_ear;
/// use tvm_core::CompoundingBasis;
///
/// let ear = nominal_to_ear(0.12, CompoundingBasis::Monthly);
/// assert!((ear - 0.126825030131).abs() < 1e-12);
/// ```
#[must_use]
pub fn nominal_to_ear(nominal: f64, basis: CompoundingBasis) -> f64 {
    if basis.is_continuous() {
        return nominal.exp() - 1.0;
    }
    let m = basis.periods_per_year();
    (1.0 + nominal / f64::from(m)).powi(m) - 1.0
}

/// Nominal rate compounded on `basis` with the given effective annual rate.
#[must_use]
pub fn ear_to_nominal(ear: f64, basis: CompoundingBasis) -> f64 {
    if basis.is_continuous() {
        return (1.0 + ear).ln();
    }
    let m = f64::from(basis.periods_per_year());
    m * ((1.0 + ear).powf(1.0 / m) - 1.0)
}

/// Restates a nominal rate compounded on `from` as one compounded on `to`.
#[must_use]
pub fn convert_compounding(rate: f64, from: CompoundingBasis, to: CompoundingBasis) -> f64 {
    ear_to_nominal(nominal_to_ear(rate, from), to)
}

/// Inflation-adjusted rate: `(1 + nominal) / (1 + inflation) − 1`.
#[must_use]
pub fn real_interest_rate(nominal: f64, inflation: f64) -> f64 {
    (1.0 + nominal) / (1.0 + inflation) - 1.0
}

/// Balance-weighted average rate of two loans.
#[must_use]
pub fn blended_rate(balance_1: f64, rate_1: f64, balance_2: f64, rate_2: f64) -> f64 {
    let total = balance_1 + balance_2;
    rate_1 * (balance_1 / total) + rate_2 * (balance_2 / total)
}

/// Geometric mean of periodic returns given in percent.
///
/// Returns zero for an empty slice.
#[must_use]
pub fn average_rate_of_return(returns_pct: &[f64]) -> f64 {
    if returns_pct.is_empty() {
        return 0.0;
    }
    let growth: f64 = returns_pct.iter().map(|r| 1.0 + r / 100.0).product();
    growth.powf(1.0 / returns_pct.len() as f64) - 1.0
}

/// Periods for funds to grow (or decay) by `factor` at `rate`.
///
/// ```text
/// n = ln(F) / ln(1 + r / m)          n = ln(F) / r   (continuous, years)
/// ```
#[must_use]
pub fn growth_decay_periods(factor: f64, rate: f64, basis: CompoundingBasis) -> f64 {
    if basis.is_continuous() {
        return factor.ln() / rate;
    }
    let i = rate / f64::from(basis.periods_per_year());
    factor.ln() / (1.0 + i).ln()
}
