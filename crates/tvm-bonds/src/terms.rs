//! Bond terms and cash-flow generation.
//!
//! A bond pays a fixed coupon `C` each period and its face value `F` with
//! the last coupon:
//!
//! ```text
//!  t      1    2    3   ...   T
//!  ------------------------------
//!  CF     C    C    C   ...  C + F
//! ```

use serde::{Deserialize, Serialize};

use tvm_core::{CashFlow, CompoundingBasis, DayBasis, PeriodConverter, TimeUnit};

use crate::error::{BondError, BondResult};

/// Contractual terms of a level-coupon bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Principal repaid at maturity.
    pub face_value: f64,
    /// Annual coupon rate in percent.
    pub coupon_rate_pct: f64,
    /// Coupon and discounting frequency.
    pub compounding: CompoundingBasis,
    /// Remaining term, in `time_unit`.
    pub term: f64,
    /// Unit of `term`.
    pub time_unit: TimeUnit,
}

impl BondTerms {
    /// Creates bond terms.
    #[must_use]
    pub fn new(
        face_value: f64,
        coupon_rate_pct: f64,
        compounding: CompoundingBasis,
        term: f64,
        time_unit: TimeUnit,
    ) -> Self {
        Self {
            face_value,
            coupon_rate_pct,
            compounding,
            term,
            time_unit,
        }
    }

    /// Creates bond terms from single-character UI codes.
    pub fn from_codes(
        face_value: f64,
        coupon_rate_pct: f64,
        compounding_code: char,
        term: f64,
        time_unit_code: char,
        day_basis: DayBasis,
    ) -> BondResult<Self> {
        let compounding = CompoundingBasis::from_code(compounding_code, day_basis)?;
        let time_unit = TimeUnit::from_code(time_unit_code, day_basis)?;
        Ok(Self::new(
            face_value,
            coupon_rate_pct,
            compounding,
            term,
            time_unit,
        ))
    }

    /// Checks that the terms describe a bond that can be valued.
    pub fn validate(&self) -> BondResult<()> {
        if !(self.face_value.is_finite() && self.face_value > 0.0) {
            return Err(BondError::invalid_terms(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        if !(self.coupon_rate_pct.is_finite() && self.coupon_rate_pct >= 0.0) {
            return Err(BondError::invalid_terms(format!(
                "coupon rate must be non-negative, got {}",
                self.coupon_rate_pct
            )));
        }
        if !(self.term.is_finite() && self.term > 0.0) {
            return Err(BondError::invalid_terms(format!(
                "term must be positive, got {}",
                self.term
            )));
        }
        Ok(())
    }

    /// Basis on which coupons are paid.
    ///
    /// Continuously compounded bonds still pay discrete coupons; they are
    /// laid out annually so that period `t` is also `t` years.
    #[must_use]
    pub fn payment_basis(&self) -> CompoundingBasis {
        if self.compounding.is_continuous() {
            CompoundingBasis::Annually
        } else {
            self.compounding
        }
    }

    /// Coupon paid each period.
    #[must_use]
    pub fn coupon_per_period(&self, periods: &PeriodConverter) -> f64 {
        self.face_value * periods.periodic_rate(self.coupon_rate_pct / 100.0, self.payment_basis())
    }

    /// Number of coupon periods, truncated and never less than one.
    #[must_use]
    pub fn period_count(&self, periods: &PeriodConverter) -> usize {
        periods
            .whole_periods(self.term, self.time_unit, self.payment_basis())
            .max(1)
    }

    /// Validates the terms and builds the cash flow.
    ///
    /// Terms spanning more than [`MAX_PERIODS`](tvm_core::MAX_PERIODS)
    /// coupon periods are rejected instead of allocated.
    pub fn checked_cash_flow(&self, periods: &PeriodConverter) -> BondResult<CashFlow> {
        self.validate()?;
        periods.bounded_periods(self.term, self.time_unit, self.payment_basis())?;
        Ok(self.cash_flow(periods))
    }

    /// Builds the bond's cash flow.
    ///
    /// Beyond [`MAX_PERIODS`](tvm_core::MAX_PERIODS) periods this is
    /// [`CashFlow::undefined`].
    #[must_use]
    pub fn cash_flow(&self, periods: &PeriodConverter) -> CashFlow {
        CashFlow::level(
            self.coupon_per_period(periods),
            self.face_value,
            self.period_count(periods),
        )
    }
}

/// Builds a bond cash flow with the default period converter.
///
/// Every entry holds `face_value × coupon_rate_pct / 100 / periods_per_year`
/// and the last entry also repays `face_value`. A term shorter than one
/// period yields a single payment; an infinite term, or one longer than
/// [`MAX_PERIODS`](tvm_core::MAX_PERIODS) periods, yields a single `NaN` payment.
///
/// # Example
///
/// ```rust
/// use tvm_bonds::bond_cash_flow;
/// use tvm_core::{CompoundingBasis, TimeUnit};
///
/// let cf = bond_cash_flow(1000.0, 3.0, CompoundingBasis::SemiAnnually, 5.0, TimeUnit::Years);
/// assert_eq!(cf.len(), 10);
/// assert_eq!(cf.last(), 1015.0);
/// ```
#[must_use]
pub fn bond_cash_flow(
    face_value: f64,
    coupon_rate_pct: f64,
    compounding: CompoundingBasis,
    term: f64,
    time_unit: TimeUnit,
) -> CashFlow {
    BondTerms::new(face_value, coupon_rate_pct, compounding, term, time_unit)
        .cash_flow(&PeriodConverter::default())
}
