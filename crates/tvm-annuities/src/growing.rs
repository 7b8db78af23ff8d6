//! Growing annuities and perpetuities.
//!
//! ## Formulas
//!
//! ```text
//! PV_growing = C / (i − g) × (1 − ((1 + g) / (1 + i))^n)
//! FV_growing = C × ((1 + i)^n − (1 + g)^n) / (i − g)
//! PV_perp    = PMT / ((1 + d)^(1/m) − 1)
//! PV_gperp   = PMT / (((1 + d)^(1/m) − 1) − ((1 + g)^(1/m) − 1))
//! ```
//!
//! When `i = g` the growing forms reduce to `C × n / (1 + i)` and
//! `C × n × (1 + i)^(n − 1)`.

use tvm_core::{CompoundingBasis, TimeUnit};

use crate::annuity::Annuities;

/// Rates closer than this are treated as equal in the growing formulas.
const EQUAL_RATE_EPSILON: f64 = 1e-12;

impl Annuities {
    /// Present value of payments starting at `first_payment` and growing
    /// by `growth` per year.
    #[must_use]
    pub fn growing_annuity_pv(
        &self,
        first_payment: f64,
        rate: f64,
        growth: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        let g = self.periods.periodic_rate(growth, basis);
        if (i - g).abs() < EQUAL_RATE_EPSILON {
            return first_payment * n / (1.0 + i);
        }
        first_payment / (i - g) * (1.0 - ((1.0 + g) / (1.0 + i)).powf(n))
    }

    /// Future value of payments starting at `first_payment` and growing
    /// by `growth` per year.
    #[must_use]
    pub fn growing_annuity_fv(
        &self,
        first_payment: f64,
        rate: f64,
        growth: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        let g = self.periods.periodic_rate(growth, basis);
        if (i - g).abs() < EQUAL_RATE_EPSILON {
            return first_payment * n * (1.0 + i).powf(n - 1.0);
        }
        first_payment * ((1.0 + i).powf(n) - (1.0 + g).powf(n)) / (i - g)
    }

    /// Present value of a perpetual level payment.
    ///
    /// `discount` is an effective annual rate; payments are made `m` times
    /// a year.
    #[must_use]
    pub fn perpetuity(&self, payment: f64, discount: f64, basis: CompoundingBasis) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        payment / sub_annual_rate(discount, basis)
    }

    /// Present value of a perpetual payment growing by `growth` per year.
    ///
    /// Returns `NaN` unless `discount > growth`; the series diverges
    /// otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tvm_annuities::Annuities;
    /// use tvm_core::CompoundingBasis;
    ///
    /// // Next dividend 1.30, growing 5% a year, discounted at 10%
    /// let pv = Annuities::default().growing_perpetuity(1.30, 0.10, 0.05, CompoundingBasis::Annually);
    /// assert!((pv - 26.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn growing_perpetuity(
        &self,
        payment: f64,
        discount: f64,
        growth: f64,
        basis: CompoundingBasis,
    ) -> f64 {
        if basis.is_continuous() || discount <= growth || discount.is_nan() || growth.is_nan() {
            return f64::NAN;
        }
        payment / (sub_annual_rate(discount, basis) - sub_annual_rate(growth, basis))
    }
}

/// Periodic rate equivalent to an effective annual rate.
fn sub_annual_rate(annual: f64, basis: CompoundingBasis) -> f64 {
    (1.0 + annual).powf(1.0 / f64::from(basis.periods_per_year())) - 1.0
}
