//! Yield to maturity, yield to call and simple yield measures.
//!
//! Yields are found by bisection on the price function, which is monotone
//! decreasing in the rate. All yields are annual rates in percent.
//!
//! # Example
//!
//! ```rust
//! use tvm_bonds::{bond_cash_flow, yield_to_maturity};
//! use tvm_core::{CompoundingBasis, TimeUnit};
//!
//! let cf = bond_cash_flow(1000.0, 10.0, CompoundingBasis::Annually, 10.0, TimeUnit::Years);
//! let ytm = yield_to_maturity(&cf, 920.0, CompoundingBasis::Annually);
//! assert!((ytm - 11.380137).abs() < 1e-4);
//! ```

use log::debug;

use tvm_core::{CashFlow, CompoundingBasis, PeriodConverter, TimeUnit};
use tvm_math::solvers::{decreasing_bisection, BisectionConfig};

use crate::pricing::{price, price_continuous};
use crate::terms::BondTerms;

/// Bisection-based yield solver.
///
/// Default tolerance: 1e-5 on price.
/// Default max iterations: 200
///
/// Running out of iterations is not an error: the last estimate is
/// returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldSolver {
    config: BisectionConfig,
}

impl YieldSolver {
    /// Creates a yield solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a yield solver from an explicit bisection configuration.
    #[must_use]
    pub fn from_config(config: BisectionConfig) -> Self {
        Self { config }
    }

    /// Sets the price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum bisections.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Returns the bisection configuration.
    #[must_use]
    pub fn config(&self) -> &BisectionConfig {
        &self.config
    }

    /// Annual rate in percent at which `cash_flow` is worth `target_price`.
    ///
    /// Returns `NaN` for a continuous basis or a non-positive price.
    #[must_use]
    pub fn yield_to_maturity(
        &self,
        cash_flow: &CashFlow,
        target_price: f64,
        basis: CompoundingBasis,
    ) -> f64 {
        if basis.is_continuous() {
            debug!("discrete yield requested on a continuous basis");
            return f64::NAN;
        }
        decreasing_bisection(|r| price(cash_flow, r, basis), target_price, &self.config).root
    }

    /// Continuously compounded annual rate in percent at which `cash_flow`
    /// is worth `target_price`.
    #[must_use]
    pub fn yield_to_maturity_continuous(&self, cash_flow: &CashFlow, target_price: f64) -> f64 {
        decreasing_bisection(|r| price_continuous(cash_flow, r), target_price, &self.config).root
    }

    /// Yield assuming the bond is redeemed at `call_price` on the call date.
    ///
    /// The cash flow runs to the call date and its final payment becomes
    /// `call_price` plus the first period's coupon.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn yield_to_call(
        &self,
        periods: &PeriodConverter,
        face_value: f64,
        coupon_rate_pct: f64,
        basis: CompoundingBasis,
        time_to_call: f64,
        time_unit: TimeUnit,
        bond_price: f64,
        call_price: f64,
    ) -> f64 {
        let to_call = BondTerms::new(face_value, coupon_rate_pct, basis, time_to_call, time_unit)
            .cash_flow(periods);
        let coupon = to_call.first();
        let to_call = to_call.with_final_payment(call_price + coupon);
        self.yield_to_maturity(&to_call, bond_price, basis)
    }
}

/// Yield to maturity in percent with the default solver.
#[must_use]
pub fn yield_to_maturity(cash_flow: &CashFlow, target_price: f64, basis: CompoundingBasis) -> f64 {
    YieldSolver::default().yield_to_maturity(cash_flow, target_price, basis)
}

/// Continuously compounded yield to maturity in percent with the default
/// solver.
#[must_use]
pub fn yield_to_maturity_continuous(cash_flow: &CashFlow, target_price: f64) -> f64 {
    YieldSolver::default().yield_to_maturity_continuous(cash_flow, target_price)
}

/// Yield to call in percent with the default solver and period converter.
///
/// # Example
///
/// ```rust
/// use tvm_bonds::yield_to_call;
/// use tvm_core::{CompoundingBasis, TimeUnit};
///
/// let ytc = yield_to_call(
///     1000.0, 10.0, CompoundingBasis::Annually, 9.0, TimeUnit::Years, 1494.93, 1100.0,
/// );
/// assert!((ytc - 4.214855).abs() < 1e-4);
/// ```
#[must_use]
pub fn yield_to_call(
    face_value: f64,
    coupon_rate_pct: f64,
    basis: CompoundingBasis,
    time_to_call: f64,
    time_unit: TimeUnit,
    bond_price: f64,
    call_price: f64,
) -> f64 {
    YieldSolver::default().yield_to_call(
        &PeriodConverter::default(),
        face_value,
        coupon_rate_pct,
        basis,
        time_to_call,
        time_unit,
        bond_price,
        call_price,
    )
}

/// Annual coupon income as a fraction of the market price.
///
/// `annual_coupon_pct` is in percent; the result is a fraction.
#[must_use]
pub fn current_yield(annual_coupon_pct: f64, face_value: f64, price: f64) -> f64 {
    (annual_coupon_pct / 100.0 * face_value) / price
}

/// Taxable yield that matches a tax-free yield after taxes.
///
/// City and state taxes are deductible against federal tax, so the
/// combined rate is `federal + (city + state) × (1 − federal)`. All inputs
/// are in percent; the result is a fraction.
#[must_use]
pub fn tax_equivalent_yield(
    tax_free_yield_pct: f64,
    city_tax_pct: f64,
    state_tax_pct: f64,
    federal_tax_pct: f64,
) -> f64 {
    let federal = federal_tax_pct / 100.0;
    let local = (city_tax_pct + state_tax_pct) / 100.0 * (1.0 - federal);
    (tax_free_yield_pct / 100.0) / (1.0 - (federal + local))
}
