//! Implied annuity rates.
//!
//! The rate of a level annuity has no closed form. It is found with the
//! Newton-bisection solver on a polynomial form of the annuity equation,
//! using the analytic derivative.
//!
//! ## Objectives
//!
//! From `PV = PMT × (1 − (1 + i)^−n) / i`, with `a = PV / PMT`:
//!
//! ```text
//! f(i)  = a × i × (1 + i)^n − (1 + i)^n + 1
//! f'(i) = a × ((1 + i)^n + n × i × (1 + i)^(n−1)) − n × (1 + i)^(n−1)
//! ```
//!
//! From `FV = PMT × ((1 + i)^n − 1) / i`, with `b = FV / PMT`:
//!
//! ```text
//! f(i)  = b × i − (1 + i)^n + 1
//! f'(i) = b − n × (1 + i)^(n−1)
//! ```
//!
//! Both vanish at `i = 0`, so brackets must start above zero.

use log::debug;
use serde::{Deserialize, Serialize};

use tvm_core::{CompoundingBasis, TimeUnit};
use tvm_math::solvers::newton_bisection;

use crate::annuity::Annuities;
use crate::error::{AnnuityError, AnnuityResult};

/// Default lower bound of the rate search, annual percent.
pub const DEFAULT_LOWER_PCT: f64 = 0.01;

/// Default upper bound of the rate search, annual percent.
pub const DEFAULT_UPPER_PCT: f64 = 100.0;

/// Search interval for an implied rate, as nominal annual percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBracket {
    /// Lower bound, annual percent.
    pub lower_pct: f64,
    /// Upper bound, annual percent.
    pub upper_pct: f64,
}

impl Default for RateBracket {
    fn default() -> Self {
        Self {
            lower_pct: DEFAULT_LOWER_PCT,
            upper_pct: DEFAULT_UPPER_PCT,
        }
    }
}

impl RateBracket {
    /// Creates a bracket from annual percentages.
    #[must_use]
    pub fn new(lower_pct: f64, upper_pct: f64) -> Self {
        Self {
            lower_pct,
            upper_pct,
        }
    }

    fn periodic(&self, basis: CompoundingBasis) -> (f64, f64) {
        let m = f64::from(basis.periods_per_year());
        (self.lower_pct / 100.0 / m, self.upper_pct / 100.0 / m)
    }
}

impl Annuities {
    /// Periodic rate at which `pmt` per period for the term is worth `pv`.
    ///
    /// The result is a periodic fraction; multiply by the periods per year
    /// for the nominal annual rate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tvm_annuities::{Annuities, RateBracket};
    /// use tvm_core::{CompoundingBasis, TimeUnit};
    ///
    /// let i = Annuities::default()
    ///     .implied_rate_from_pv(
    ///         24000.0,
    ///         500.0,
    ///         CompoundingBasis::Monthly,
    ///         60.0,
    ///         TimeUnit::Months,
    ///         RateBracket::new(1.0, 31.0),
    ///     )
    ///     .unwrap();
    /// assert!((i * 100.0 - 0.7628634).abs() < 1e-5);
    /// ```
    pub fn implied_rate_from_pv(
        &self,
        pv: f64,
        pmt: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
        bracket: RateBracket,
    ) -> AnnuityResult<f64> {
        let n = self.implied_rate_periods(pmt, basis, n, unit)?;
        let ratio = pv / pmt;
        let objective = |i: f64| {
            let g = (1.0 + i).powf(n);
            let g1 = (1.0 + i).powf(n - 1.0);
            (ratio * i * g - g + 1.0, ratio * (g + n * i * g1) - n * g1)
        };
        self.solve(objective, basis, bracket)
    }

    /// Periodic rate at which `pmt` per period for the term accumulates
    /// to `fv`.
    pub fn implied_rate_from_fv(
        &self,
        fv: f64,
        pmt: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
        bracket: RateBracket,
    ) -> AnnuityResult<f64> {
        let n = self.implied_rate_periods(pmt, basis, n, unit)?;
        let ratio = fv / pmt;
        let objective = |i: f64| {
            let g = (1.0 + i).powf(n);
            let g1 = (1.0 + i).powf(n - 1.0);
            (ratio * i - g + 1.0, ratio - n * g1)
        };
        self.solve(objective, basis, bracket)
    }

    fn implied_rate_periods(
        &self,
        pmt: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> AnnuityResult<f64> {
        if basis.is_continuous() {
            return Err(AnnuityError::invalid_input(
                "implied annuity rates need a discrete compounding basis",
            ));
        }
        if pmt == 0.0 || !pmt.is_finite() {
            return Err(AnnuityError::invalid_input(format!(
                "payment must be non-zero and finite, got {pmt}"
            )));
        }
        let n = self.periods.periods(n, unit, basis);
        if !(n.is_finite() && n > 0.0) {
            return Err(AnnuityError::invalid_input(format!(
                "term must cover a positive number of periods, got {n}"
            )));
        }
        Ok(n)
    }

    fn solve<F>(&self, objective: F, basis: CompoundingBasis, bracket: RateBracket) -> AnnuityResult<f64>
    where
        F: FnMut(f64) -> (f64, f64),
    {
        let (lo, hi) = bracket.periodic(basis);
        let result = newton_bisection(objective, lo, hi, &self.solver)?;
        debug!(
            "implied periodic rate {} after {} iterations",
            result.root, result.iterations
        );
        Ok(result.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuity::PaymentTiming;
    use approx::assert_relative_eq;
    use tvm_math::MathError;

    const MONTHLY: CompoundingBasis = CompoundingBasis::Monthly;

    #[test]
    fn test_implied_rate_monthly() {
        let a = Annuities::default();
        let i = a
            .implied_rate_from_pv(
                24000.0,
                500.0,
                MONTHLY,
                60.0,
                TimeUnit::Months,
                RateBracket::new(1.0, 31.0),
            )
            .unwrap();
        assert_relative_eq!(i * 100.0, 0.7628634, epsilon = 1e-5);
        assert_relative_eq!(i * 1200.0, 9.154323, epsilon = 1e-4);

        let i = a
            .implied_rate_from_pv(
                11200.0,
                291.0,
                MONTHLY,
                4.0,
                TimeUnit::Years,
                RateBracket::new(4.0, 12.0),
            )
            .unwrap();
        assert_relative_eq!(i * 100.0, 0.94007411, epsilon = 1e-5);
    }

    #[test]
    fn test_implied_rate_annual() {
        let a = Annuities::default();
        let i = a
            .implied_rate_from_pv(
                50000.0,
                13500.0,
                CompoundingBasis::Annually,
                5.0,
                TimeUnit::Years,
                RateBracket::new(10.0, 15.0),
            )
            .unwrap();
        assert_relative_eq!(i * 100.0, 10.916174523, epsilon = 1e-5);
    }

    #[test]
    fn test_implied_rate_from_fv_round_trip() {
        let a = Annuities::default();
        let fv = a.future_value_of_payments(
            200.0,
            0.06,
            MONTHLY,
            10.0,
            TimeUnit::Years,
            PaymentTiming::Ordinary,
        );
        let i = a
            .implied_rate_from_fv(fv, 200.0, MONTHLY, 120.0, TimeUnit::Months, RateBracket::default())
            .unwrap();
        assert_relative_eq!(i, 0.005, epsilon = 1e-9);
    }

    #[test]
    fn test_no_bracket_is_error() {
        let a = Annuities::default();
        // The true rate is about 9.15% a year, outside 1%..5%
        let err = a
            .implied_rate_from_pv(
                24000.0,
                500.0,
                MONTHLY,
                60.0,
                TimeUnit::Months,
                RateBracket::new(1.0, 5.0),
            )
            .unwrap_err();
        assert!(err.is_no_bracket());
        assert!(matches!(
            err,
            AnnuityError::Solver(MathError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn test_invalid_requests() {
        let a = Annuities::default();
        let bracket = RateBracket::default();
        assert!(matches!(
            a.implied_rate_from_pv(1000.0, 0.0, MONTHLY, 12.0, TimeUnit::Months, bracket),
            Err(AnnuityError::InvalidInput { .. })
        ));
        assert!(matches!(
            a.implied_rate_from_pv(
                1000.0,
                100.0,
                CompoundingBasis::Continuous,
                12.0,
                TimeUnit::Months,
                bracket
            ),
            Err(AnnuityError::InvalidInput { .. })
        ));
        assert!(matches!(
            a.implied_rate_from_fv(1000.0, 100.0, MONTHLY, 0.0, TimeUnit::Months, bracket),
            Err(AnnuityError::InvalidInput { .. })
        ));
    }
}
