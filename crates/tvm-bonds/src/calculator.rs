//! Bond calculator composing a period converter and a yield solver.

use log::debug;
use serde::{Deserialize, Serialize};

use tvm_core::{CashFlow, PeriodConverter};

use crate::error::{BondError, BondResult};
use crate::pricing::{price, price_continuous};
use crate::risk::{
    convexity, convexity_continuous, duration_at_rate, duration_continuous,
    modified_duration_at_rate,
};
use crate::terms::BondTerms;
use crate::yields::{current_yield, YieldSolver};

/// Full set of analytics for a bond at a market price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondAnalytics {
    /// Market price the analytics were computed at.
    pub price: f64,
    /// Yield to maturity, annual percent.
    pub ytm_pct: f64,
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration in years.
    pub modified_duration: f64,
    /// Convexity in years squared.
    pub convexity: f64,
    /// Current yield as a fraction.
    pub current_yield: f64,
}

/// Bond calculator.
///
/// Holds the day-count convention for period conversion and the yield
/// solver settings, so one instance can be configured once and reused.
#[derive(Debug, Clone, Copy, Default)]
pub struct BondCalculator {
    periods: PeriodConverter,
    solver: YieldSolver,
}

impl BondCalculator {
    /// Creates a calculator from its parts.
    #[must_use]
    pub fn new(periods: PeriodConverter, solver: YieldSolver) -> Self {
        Self { periods, solver }
    }

    /// Returns the period converter.
    #[must_use]
    pub fn periods(&self) -> &PeriodConverter {
        &self.periods
    }

    /// Returns the yield solver.
    #[must_use]
    pub fn solver(&self) -> &YieldSolver {
        &self.solver
    }

    /// Builds the cash flow for `terms`.
    pub fn cash_flow(&self, terms: &BondTerms) -> BondResult<CashFlow> {
        terms.checked_cash_flow(&self.periods)
    }

    /// Prices `terms` at an annual yield in percent, using continuous
    /// discounting when the terms compound continuously.
    pub fn price(&self, terms: &BondTerms, annual_rate_pct: f64) -> BondResult<f64> {
        let cf = self.cash_flow(terms)?;
        Ok(if terms.compounding.is_continuous() {
            price_continuous(&cf, annual_rate_pct)
        } else {
            price(&cf, annual_rate_pct, terms.compounding)
        })
    }

    /// Yield to maturity in percent at `market_price`.
    pub fn yield_to_maturity(&self, terms: &BondTerms, market_price: f64) -> BondResult<f64> {
        check_price(market_price)?;
        let cf = self.cash_flow(terms)?;
        Ok(self.solve_yield(terms, &cf, market_price))
    }

    /// Yield to call in percent.
    pub fn yield_to_call(
        &self,
        terms: &BondTerms,
        time_to_call: f64,
        market_price: f64,
        call_price: f64,
    ) -> BondResult<f64> {
        check_price(market_price)?;
        terms.validate()?;
        if !(time_to_call.is_finite() && time_to_call > 0.0) {
            return Err(BondError::invalid_terms(format!(
                "time to call must be positive, got {time_to_call}"
            )));
        }
        self.periods
            .bounded_periods(time_to_call, terms.time_unit, terms.payment_basis())?;
        Ok(self.solver.yield_to_call(
            &self.periods,
            terms.face_value,
            terms.coupon_rate_pct,
            terms.compounding,
            time_to_call,
            terms.time_unit,
            market_price,
            call_price,
        ))
    }

    /// Solves the yield and computes duration, convexity and current yield
    /// at that yield.
    pub fn analyze(&self, terms: &BondTerms, market_price: f64) -> BondResult<BondAnalytics> {
        check_price(market_price)?;
        let cf = self.cash_flow(terms)?;
        let ytm = self.solve_yield(terms, &cf, market_price);
        debug!(
            "analyzing {} periods at price {market_price}: ytm {ytm}",
            cf.len()
        );

        let (macaulay, modified, cx) = if terms.compounding.is_continuous() {
            let d = duration_continuous(&cf, ytm, market_price);
            (d, d, convexity_continuous(&cf, ytm))
        } else {
            (
                duration_at_rate(&cf, ytm, terms.compounding, market_price),
                modified_duration_at_rate(&cf, ytm, terms.compounding, market_price),
                convexity(&cf, ytm, terms.compounding),
            )
        };

        Ok(BondAnalytics {
            price: market_price,
            ytm_pct: ytm,
            macaulay_duration: macaulay,
            modified_duration: modified,
            convexity: cx,
            current_yield: current_yield(terms.coupon_rate_pct, terms.face_value, market_price),
        })
    }

    fn solve_yield(&self, terms: &BondTerms, cf: &CashFlow, market_price: f64) -> f64 {
        if terms.compounding.is_continuous() {
            self.solver.yield_to_maturity_continuous(cf, market_price)
        } else {
            self.solver
                .yield_to_maturity(cf, market_price, terms.compounding)
        }
    }
}

fn check_price(price: f64) -> BondResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_price(price))
    }
}
