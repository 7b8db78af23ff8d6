//! Lump sums and level annuities.
//!
//! An annuity is a series of equal payments at fixed intervals. Payments at
//! the end of each period make an *ordinary* annuity; payments at the start
//! make an *annuity due*, which is worth one extra period of interest.
//!
//! ## Formulas
//!
//! ```text
//! FV  = PV × (1 + i)^n                 (continuous: PV × e^(r × years))
//! FVA = PMT × ((1 + i)^n − 1) / i
//! PVA = PMT × (1 − (1 + i)^−n) / i
//! ```
//!
//! `i` is the periodic rate and `n` the number of periods, both derived
//! through the [`PeriodConverter`]. Rates are fractions (0.05 for 5%).

use serde::{Deserialize, Serialize};

use tvm_core::{CompoundingBasis, PeriodConverter, TimeUnit};
use tvm_math::solvers::SolverConfig;

use crate::rates::growth_decay_periods;

/// When payments fall within each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentTiming {
    /// Payments at the end of each period.
    #[default]
    Ordinary,
    /// Payments at the beginning of each period.
    Due,
}

impl PaymentTiming {
    /// Growth applied on top of the ordinary annuity value.
    #[must_use]
    pub fn factor(&self, periodic_rate: f64) -> f64 {
        match self {
            PaymentTiming::Ordinary => 1.0,
            PaymentTiming::Due => 1.0 + periodic_rate,
        }
    }
}

/// Annuity calculator.
///
/// Composes the period converter used to normalise terms with the
/// configuration of the implied-rate solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Annuities {
    pub(crate) periods: PeriodConverter,
    pub(crate) solver: SolverConfig,
}

impl Annuities {
    /// Creates an annuity calculator.
    #[must_use]
    pub fn new(periods: PeriodConverter, solver: SolverConfig) -> Self {
        Self { periods, solver }
    }

    /// Returns the period converter.
    #[must_use]
    pub fn periods(&self) -> &PeriodConverter {
        &self.periods
    }

    /// Returns the implied-rate solver configuration.
    #[must_use]
    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Periodic rate and period count for a discrete basis.
    pub(crate) fn rate_and_count(
        &self,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> (f64, f64) {
        (
            self.periods.periodic_rate(rate, basis),
            self.periods.periods(n, unit, basis),
        )
    }

    // =========================================================================
    // Lump sums
    // =========================================================================

    /// Compounds `pv` forward over the term.
    #[must_use]
    pub fn future_value(
        &self,
        pv: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if basis.is_continuous() {
            return pv * (rate * self.periods.years(n, unit)).exp();
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        pv * (1.0 + i).powf(n)
    }

    /// Discounts `fv` back over the term.
    #[must_use]
    pub fn present_value(
        &self,
        fv: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if basis.is_continuous() {
            return fv * (-rate * self.periods.years(n, unit)).exp();
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        fv / (1.0 + i).powf(n)
    }

    /// Nominal annual rate that grows `pv` into `fv` over the term.
    ///
    /// ```text
    /// r = ((FV / PV)^(1/n) − 1) × m      (continuous: ln(FV / PV) / years)
    /// ```
    #[must_use]
    pub fn rate_from_pv_fv(
        &self,
        pv: f64,
        fv: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if basis.is_continuous() {
            return (fv / pv).ln() / self.periods.years(n, unit);
        }
        let n = self.periods.periods(n, unit, basis);
        ((fv / pv).powf(1.0 / n) - 1.0) * f64::from(basis.periods_per_year())
    }

    /// Periods needed for `pv` to grow into `fv`.
    ///
    /// Under continuous compounding the result is in years.
    #[must_use]
    pub fn periods_from_pv_fv(&self, pv: f64, fv: f64, rate: f64, basis: CompoundingBasis) -> f64 {
        growth_decay_periods(fv / pv, rate, basis)
    }

    /// Value after `n` periods of depreciation at `rate`.
    ///
    /// A rate of inflation `i` erodes purchasing power by `i / (1 + i)`
    /// per period:
    ///
    /// ```text
    /// FV = PV × (1 − i / (1 + i))^n
    /// ```
    #[must_use]
    pub fn depreciation(
        &self,
        pv: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        pv * (1.0 - i / (1.0 + i)).powf(n)
    }

    // =========================================================================
    // Level annuities
    // =========================================================================

    /// Future value of a level payment stream.
    #[must_use]
    pub fn future_value_of_payments(
        &self,
        pmt: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
        timing: PaymentTiming,
    ) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        pmt * ((1.0 + i).powf(n) - 1.0) / i * timing.factor(i)
    }

    /// Present value of a level payment stream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tvm_annuities::{Annuities, PaymentTiming};
    /// use tvm_core::{CompoundingBasis, TimeUnit};
    ///
    /// let a = Annuities::default();
    /// let pv = a.present_value_of_payments(
    ///     100.0, 0.06, CompoundingBasis::Annually, 5.0, TimeUnit::Years, PaymentTiming::Ordinary,
    /// );
    /// assert!((pv - 421.236379).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn present_value_of_payments(
        &self,
        pmt: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
        timing: PaymentTiming,
    ) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        pmt * (1.0 - (1.0 + i).powf(-n)) / i * timing.factor(i)
    }

    /// Level payment that amortises `pv` over the term.
    #[must_use]
    pub fn payment_from_pv(
        &self,
        pv: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
        timing: PaymentTiming,
    ) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        pv * i / (1.0 - (1.0 + i).powf(-n)) / timing.factor(i)
    }

    /// Level payment that accumulates to `fv` over the term.
    #[must_use]
    pub fn payment_from_fv(
        &self,
        fv: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
        timing: PaymentTiming,
    ) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let (i, n) = self.rate_and_count(rate, basis, n, unit);
        fv * i / ((1.0 + i).powf(n) - 1.0) / timing.factor(i)
    }

    /// Payments of `pmt` needed to pay off `pv`.
    ///
    /// ```text
    /// n = −ln(1 − i × PV / PMT) / ln(1 + i)
    /// ```
    ///
    /// `NaN` when the payment does not even cover the interest.
    #[must_use]
    pub fn periods_from_pmt_pv(&self, pmt: f64, pv: f64, rate: f64, basis: CompoundingBasis) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let i = self.periods.periodic_rate(rate, basis);
        -(1.0 - i * pv / pmt).ln() / (1.0 + i).ln()
    }

    /// Payments of `pmt` needed to accumulate `fv`.
    ///
    /// ```text
    /// n = ln(1 + i × FV / PMT) / ln(1 + i)
    /// ```
    #[must_use]
    pub fn periods_from_pmt_fv(&self, pmt: f64, fv: f64, rate: f64, basis: CompoundingBasis) -> f64 {
        if basis.is_continuous() {
            return f64::NAN;
        }
        let i = self.periods.periodic_rate(rate, basis);
        (1.0 + i * fv / pmt).ln() / (1.0 + i).ln()
    }
}
