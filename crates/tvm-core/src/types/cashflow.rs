//! Periodic cash flow sequences.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::periods::MAX_PERIODS;

/// An ordered sequence of payments, one per compounding period.
///
/// Period `t` runs from 1 to `len()`. A cash flow always holds at least one
/// payment and is immutable once built; [`CashFlow::with_final_payment`]
/// consumes the value, so a substituted final payment is never visible to
/// another holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlow {
    amounts: Vec<f64>,
}

impl CashFlow {
    /// Builds a cash flow from explicit payment amounts.
    pub fn from_amounts(amounts: Vec<f64>) -> CoreResult<Self> {
        if amounts.is_empty() {
            return Err(CoreError::EmptyCashFlow);
        }
        Ok(Self { amounts })
    }

    /// Builds a level-coupon cash flow: `periods` payments of `coupon`, with
    /// `principal` added to the last.
    ///
    /// A period count below one is coerced to a single period. A count
    /// above [`MAX_PERIODS`] gives [`CashFlow::undefined`], so prices and
    /// yields computed from it come out as `NaN`.
    #[must_use]
    pub fn level(coupon: f64, principal: f64, periods: usize) -> Self {
        if periods > MAX_PERIODS {
            return Self::undefined();
        }
        let mut amounts = vec![coupon; periods.max(1)];
        if let Some(last) = amounts.last_mut() {
            *last += principal;
        }
        Self { amounts }
    }

    /// A single `NaN` payment, standing in for a cash flow that cannot be
    /// built.
    #[must_use]
    pub fn undefined() -> Self {
        Self {
            amounts: vec![f64::NAN],
        }
    }

    /// Returns the amounts in period order.
    #[must_use]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Returns the payment in period `t` (1-based).
    #[must_use]
    pub fn get(&self, t: usize) -> Option<f64> {
        t.checked_sub(1).and_then(|i| self.amounts.get(i).copied())
    }

    /// Returns the first payment.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.amounts[0]
    }

    /// Returns the last payment.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.amounts[self.amounts.len() - 1]
    }

    /// Sum of all payments, undiscounted.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Iterates `(t, amount)` pairs with `t` starting at 1.0.
    pub fn periods(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| ((i + 1) as f64, amount))
    }

    /// Replaces the final payment and returns the modified cash flow.
    #[must_use]
    pub fn with_final_payment(mut self, amount: f64) -> Self {
        let last = self.amounts.len() - 1;
        self.amounts[last] = amount;
        self
    }
}

impl TryFrom<Vec<f64>> for CashFlow {
    type Error = CoreError;

    fn try_from(amounts: Vec<f64>) -> CoreResult<Self> {
        Self::from_amounts(amounts)
    }
}

impl From<CashFlow> for Vec<f64> {
    fn from(cash_flow: CashFlow) -> Self {
        cash_flow.amounts
    }
}

impl AsRef<[f64]> for CashFlow {
    fn as_ref(&self) -> &[f64] {
        &self.amounts
    }
}
