//! Discounting of cash flows under periodic and continuous compounding.
//!
//! ## Formula
//!
//! ```text
//! P  = Σ CF_t / (1 + r/m)^t        (periodic, m periods per year)
//! Pc = Σ CF_t × e^(−r t)           (continuous)
//! ```
//!
//! Both are strictly decreasing in `r` for non-negative cash flows, which
//! the yield bisection relies on.

use tvm_core::{periodic_rate, CashFlow, CompoundingBasis};

/// Present value of `cash_flow` at an annual rate in percent.
///
/// Returns `NaN` for [`CompoundingBasis::Continuous`]; use
/// [`price_continuous`] instead.
///
/// # Example
///
/// ```rust
/// use tvm_bonds::{bond_cash_flow, price};
/// use tvm_core::{CompoundingBasis, TimeUnit};
///
/// let cf = bond_cash_flow(100.0, 10.0, CompoundingBasis::Annually, 3.0, TimeUnit::Years);
/// let p = price(&cf, 9.0, CompoundingBasis::Annually);
/// assert!((p - 102.5312946).abs() < 1e-6);
/// ```
#[must_use]
pub fn price(cash_flow: &CashFlow, annual_rate_pct: f64, basis: CompoundingBasis) -> f64 {
    if basis.is_continuous() {
        return f64::NAN;
    }
    let growth = 1.0 + periodic_rate(annual_rate_pct / 100.0, basis.periods_per_year());
    cash_flow
        .periods()
        .map(|(t, amount)| amount / growth.powf(t))
        .sum()
}

/// Present value of `cash_flow` under continuous compounding at an annual
/// rate in percent.
#[must_use]
pub fn price_continuous(cash_flow: &CashFlow, annual_rate_pct: f64) -> f64 {
    let r = annual_rate_pct / 100.0;
    cash_flow
        .periods()
        .map(|(t, amount)| (-r * t).exp() * amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond_cash_flow;
    use approx::assert_relative_eq;
    use tvm_core::TimeUnit;

    #[test]
    fn test_discount_bond() {
        let cf = bond_cash_flow(
            1000.0,
            10.0,
            CompoundingBasis::SemiAnnually,
            10.0,
            TimeUnit::Years,
        );
        let p = price(&cf, 11.0, CompoundingBasis::SemiAnnually);
        assert_relative_eq!(p, 940.2480875, epsilon = 1e-6);
    }

    #[test]
    fn test_par_and_premium() {
        let cf = bond_cash_flow(
            1000.0,
            10.0,
            CompoundingBasis::SemiAnnually,
            10.0,
            TimeUnit::Years,
        );
        assert_relative_eq!(
            price(&cf, 10.0, CompoundingBasis::SemiAnnually),
            1000.0,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            price(&cf, 9.0, CompoundingBasis::SemiAnnually),
            1065.03968225,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_zero_coupon() {
        let cf = CashFlow::from_amounts(vec![0.0, 0.0, 0.0, 0.0, 100.0]).unwrap();
        assert_relative_eq!(
            price(&cf, 6.0, CompoundingBasis::Annually),
            74.72581729,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_zero_rate_is_undiscounted_sum() {
        let cf = bond_cash_flow(100.0, 5.0, CompoundingBasis::Quarterly, 2.0, TimeUnit::Years);
        assert_relative_eq!(price(&cf, 0.0, CompoundingBasis::Quarterly), cf.total());
        assert_relative_eq!(price_continuous(&cf, 0.0), cf.total());
    }

    #[test]
    fn test_continuous_basis_is_nan() {
        let cf = bond_cash_flow(100.0, 5.0, CompoundingBasis::Annually, 2.0, TimeUnit::Years);
        assert!(price(&cf, 5.0, CompoundingBasis::Continuous).is_nan());
    }

    #[test]
    fn test_price_continuous() {
        let cf = bond_cash_flow(100.0, 10.0, CompoundingBasis::Annually, 3.0, TimeUnit::Years);
        assert_relative_eq!(price_continuous(&cf, 9.0), 101.463758, epsilon = 1e-6);
        assert_relative_eq!(price_continuous(&cf, 8.0), 104.281666, epsilon = 1e-6);
    }

    #[test]
    fn test_nan_rate_propagates() {
        let cf = bond_cash_flow(100.0, 10.0, CompoundingBasis::Annually, 3.0, TimeUnit::Years);
        assert!(price(&cf, f64::NAN, CompoundingBasis::Annually).is_nan());
        assert!(price_continuous(&cf, f64::NAN).is_nan());
    }
}
