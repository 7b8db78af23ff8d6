//! Mortgage cost and amortization.
//!
//! A mortgage is an ordinary annuity whose present value is the loan. Each
//! payment first covers the interest on the outstanding balance; the rest
//! repays principal. The balance after payment `k` is the present value of
//! the payments still due.

use serde::{Deserialize, Serialize};

use tvm_core::{CompoundingBasis, PeriodConverter, TimeUnit};
use tvm_math::solvers::SolverConfig;

use crate::annuity::{Annuities, PaymentTiming};
use crate::error::{AnnuityError, AnnuityResult};

/// Headline cost of a mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageCost {
    /// Level periodic payment.
    pub payment: f64,
    /// Sum of all payments.
    pub total_cost: f64,
    /// Sum of all interest paid.
    pub total_interest: f64,
}

/// One row of an amortization table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number, starting at 1.
    pub number: usize,
    /// Payment made.
    pub payment: f64,
    /// Part of the payment applied to principal.
    pub principal: f64,
    /// Part of the payment applied to interest.
    pub interest: f64,
    /// Balance after the payment.
    pub balance: f64,
}

/// Full amortization table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Headline cost.
    pub cost: MortgageCost,
    /// One row per payment.
    pub rows: Vec<AmortizationRow>,
}

/// Mortgage calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mortgage {
    annuities: Annuities,
}

impl Mortgage {
    /// Creates a mortgage calculator using `periods` for term conversion.
    #[must_use]
    pub fn new(periods: PeriodConverter) -> Self {
        Self {
            annuities: Annuities::new(periods, SolverConfig::default()),
        }
    }

    /// Payment, total cost and total interest of a loan of `principal`.
    ///
    /// All three are `NaN` under continuous compounding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tvm_annuities::Mortgage;
    /// use tvm_core::{CompoundingBasis, TimeUnit};
    ///
    /// let cost = Mortgage::default().cost(
    ///     300_000.0, 0.03375, CompoundingBasis::Monthly, 360.0, TimeUnit::Months,
    /// );
    /// assert!((cost.payment - 1326.29).abs() < 0.005);
    /// assert!((cost.total_interest - 177_463.91).abs() < 0.005);
    /// ```
    #[must_use]
    pub fn cost(
        &self,
        principal: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> MortgageCost {
        let payment = self.annuities.payment_from_pv(
            principal,
            rate,
            basis,
            n,
            unit,
            PaymentTiming::Ordinary,
        );
        let total_cost = payment * self.annuities.periods().periods(n, unit, basis);
        MortgageCost {
            payment,
            total_cost,
            total_interest: total_cost - principal,
        }
    }

    /// Amortization table with one row per whole payment period.
    ///
    /// A term that is not a whole number of periods is amortized over the
    /// whole periods it contains, so the table's cost can differ from
    /// [`Mortgage::cost`] for the same term. Terms longer than
    /// [`MAX_PERIODS`](tvm_core::MAX_PERIODS) periods are rejected.
    pub fn schedule(
        &self,
        principal: f64,
        rate: f64,
        basis: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> AnnuityResult<AmortizationSchedule> {
        if basis.is_continuous() {
            return Err(AnnuityError::invalid_input(
                "an amortization table needs a discrete compounding basis",
            ));
        }
        let count = self.annuities.periods().bounded_periods(n, unit, basis)?;
        if count == 0 {
            return Err(AnnuityError::invalid_input(format!(
                "term must cover at least one payment, got {} periods",
                self.annuities.periods().periods(n, unit, basis)
            )));
        }

        let i = self.annuities.periods().periodic_rate(rate, basis);
        let whole = count as f64;
        let payment = principal * i / (1.0 - (1.0 + i).powf(-whole));
        let total_cost = payment * whole;
        let cost = MortgageCost {
            payment,
            total_cost,
            total_interest: total_cost - principal,
        };

        let mut outstanding = principal;
        let rows = (1..=count)
            .map(|number| {
                let remaining = (count - number) as f64;
                let balance = payment * (1.0 - (1.0 + i).powf(-remaining)) / i;
                let repaid = outstanding - balance;
                outstanding = balance;
                AmortizationRow {
                    number,
                    payment,
                    principal: repaid,
                    interest: payment - repaid,
                    balance,
                }
            })
            .collect();

        Ok(AmortizationSchedule { cost, rows })
    }
}
