//! Simple interest on the three customary day-count bases.
//!
//! ```text
//! INT = P × i × t
//! ```
//!
//! The basis only changes how a span of days becomes a year fraction:
//!
//! | Basis      | Days in the span         | Days in a year |
//! |------------|--------------------------|----------------|
//! | Ordinary   | whole 30-day months      | 360            |
//! | Banker's   | exact                    | 360            |
//! | Accurate   | exact                    | 365            |
//!
//! For $10,000 at 9% over the 153 days from June 1 to November 1 this gives
//! 375.00 (ordinary, five 30-day months), 382.50 (banker's) and 377.26
//! (accurate). Spans in months, quarters and other calendar units convert
//! the same way on every basis.

use std::fmt;

use serde::{Deserialize, Serialize};

use tvm_core::periods::DAYS_PER_MONTH;
use tvm_core::{CompoundingBasis, PeriodConverter, TimeUnit};

/// Day-count basis for simple interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimpleInterestBasis {
    /// 30-day months in a 360-day year.
    Ordinary,
    /// Exact days in a 360-day year (commercial interest).
    #[default]
    Bankers,
    /// Exact days in a 365-day year.
    Accurate,
}

impl SimpleInterestBasis {
    /// All bases.
    pub const ALL: [Self; 3] = [Self::Ordinary, Self::Bankers, Self::Accurate];

    /// Days in a year on this basis.
    #[must_use]
    pub fn days_per_year(&self) -> f64 {
        match self {
            SimpleInterestBasis::Ordinary | SimpleInterestBasis::Bankers => 360.0,
            SimpleInterestBasis::Accurate => 365.0,
        }
    }

    /// Days that count towards interest out of an exact span of `days`.
    #[must_use]
    pub fn counted_days(&self, days: f64) -> f64 {
        match self {
            SimpleInterestBasis::Ordinary => (days / DAYS_PER_MONTH).trunc() * DAYS_PER_MONTH,
            SimpleInterestBasis::Bankers | SimpleInterestBasis::Accurate => days,
        }
    }
}

impl fmt::Display for SimpleInterestBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimpleInterestBasis::Ordinary => "Ordinary (30/360)",
            SimpleInterestBasis::Bankers => "Banker's (exact/360)",
            SimpleInterestBasis::Accurate => "Accurate (exact/365)",
        };
        write!(f, "{name}")
    }
}

/// Simple interest calculator for one day-count basis.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterest {
    basis: SimpleInterestBasis,
    periods: PeriodConverter,
}

impl SimpleInterest {
    /// Creates a calculator for `basis`.
    #[must_use]
    pub fn new(basis: SimpleInterestBasis, periods: PeriodConverter) -> Self {
        Self { basis, periods }
    }

    /// Returns the day-count basis.
    #[must_use]
    pub fn basis(&self) -> SimpleInterestBasis {
        self.basis
    }

    /// Fraction of a year covered by `n` units of `unit`.
    #[must_use]
    pub fn year_fraction(&self, n: f64, unit: TimeUnit) -> f64 {
        if unit.is_days() {
            self.basis.counted_days(n) / self.basis.days_per_year()
        } else {
            self.periods.years(n, unit)
        }
    }

    /// Interest earned on `principal` at annual `rate` over the span.
    ///
    /// `NaN` under continuous compounding.
    #[must_use]
    pub fn interest(
        &self,
        principal: f64,
        rate: f64,
        compounding: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if compounding.is_continuous() {
            return f64::NAN;
        }
        principal * rate * self.year_fraction(n, unit)
    }

    /// Annual rate at which `principal` earns `interest` over the span.
    #[must_use]
    pub fn rate(&self, principal: f64, interest: f64, n: f64, unit: TimeUnit) -> f64 {
        interest / (principal * self.year_fraction(n, unit))
    }

    /// Principal that earns `interest` at annual `rate` over the span.
    #[must_use]
    pub fn principal(
        &self,
        interest: f64,
        rate: f64,
        compounding: CompoundingBasis,
        n: f64,
        unit: TimeUnit,
    ) -> f64 {
        if compounding.is_continuous() {
            return f64::NAN;
        }
        interest / (rate * self.year_fraction(n, unit))
    }

    /// Time for `principal` to earn `interest` at annual `rate`, counted in
    /// `compounding` periods.
    ///
    /// A daily basis yields days; the ordinary basis does not round the
    /// result to whole months.
    #[must_use]
    pub fn time(
        &self,
        principal: f64,
        interest: f64,
        rate: f64,
        compounding: CompoundingBasis,
    ) -> f64 {
        if compounding.is_continuous() {
            return f64::NAN;
        }
        interest * f64::from(compounding.periods_per_year()) / (rate * principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calc(basis: SimpleInterestBasis) -> SimpleInterest {
        SimpleInterest::new(basis, PeriodConverter::default())
    }

    const ORDINARY: SimpleInterestBasis = SimpleInterestBasis::Ordinary;
    const BANKERS: SimpleInterestBasis = SimpleInterestBasis::Bankers;
    const ACCURATE: SimpleInterestBasis = SimpleInterestBasis::Accurate;
    const ANNUAL: CompoundingBasis = CompoundingBasis::Annually;

    #[test]
    fn test_interest_june_to_november() {
        let days = TimeUnit::Days365;
        assert_relative_eq!(
            calc(BANKERS).interest(10000.0, 0.09, ANNUAL, 153.0, days),
            382.50,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            calc(ACCURATE).interest(10000.0, 0.09, ANNUAL, 153.0, days),
            377.26027397,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            calc(ORDINARY).interest(10000.0, 0.09, ANNUAL, 153.0, TimeUnit::Days360),
            375.00,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_interest_in_months() {
        for basis in SimpleInterestBasis::ALL {
            for compounding in [ANNUAL, CompoundingBasis::Monthly] {
                assert_relative_eq!(
                    calc(basis).interest(100.0, 0.04, compounding, 1.0, TimeUnit::Months),
                    0.3333333333,
                    epsilon = 1e-9
                );
            }
        }
        assert_relative_eq!(
            calc(ACCURATE).interest(156.0, 1.53846, CompoundingBasis::Monthly, 1.0, TimeUnit::Months),
            19.99998,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rate() {
        assert_relative_eq!(
            calc(ACCURATE).rate(156.0, 20.0, 1.0, TimeUnit::Months) * 100.0,
            153.84615384,
            epsilon = 1e-7
        );
        assert_relative_eq!(
            calc(ACCURATE).rate(156.0, 20.0, 1.0, TimeUnit::Years) * 100.0,
            12.8205128,
            epsilon = 1e-7
        );
        assert_relative_eq!(
            calc(BANKERS).rate(10000.0, 382.50, 153.0, TimeUnit::Days360) * 100.0,
            9.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            calc(ORDINARY).rate(10000.0, 375.0, 153.0, TimeUnit::Days360) * 100.0,
            9.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            calc(ORDINARY).rate(100.0, 23.33, 1.0, TimeUnit::Months) * 100.0,
            279.96,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_principal() {
        for basis in SimpleInterestBasis::ALL {
            assert_relative_eq!(
                calc(basis).principal(4.0, 0.04, CompoundingBasis::Monthly, 1.0, TimeUnit::Months),
                1200.0,
                epsilon = 1e-9
            );
        }
        assert_relative_eq!(
            calc(BANKERS).principal(382.50, 0.09, ANNUAL, 153.0, TimeUnit::Days360),
            10000.0,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            calc(ORDINARY).principal(375.0, 0.09, ANNUAL, 153.0, TimeUnit::Days360),
            10000.0,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            calc(ACCURATE).principal(377.26, 0.09, ANNUAL, 153.0, TimeUnit::Days365),
            9999.9927378,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_time() {
        let c = calc(BANKERS);
        assert_relative_eq!(
            c.time(100.0, 4.0, 0.04, CompoundingBasis::Monthly),
            12.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(c.time(100.0, 1.33, 0.04, ANNUAL), 0.3325, epsilon = 1e-12);
        assert_relative_eq!(
            c.time(10000.0, 382.50, 0.09, CompoundingBasis::Daily360),
            153.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            calc(ACCURATE).time(10000.0, 377.26, 0.09, CompoundingBasis::Daily365),
            152.99988888,
            epsilon = 1e-7
        );
        assert_relative_eq!(
            calc(ORDINARY).time(10000.0, 375.0, 0.09, CompoundingBasis::Daily360),
            150.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_continuous_is_nan() {
        let c = calc(ACCURATE);
        let cont = CompoundingBasis::Continuous;
        assert!(c.interest(100.0, 0.05, cont, 1.0, TimeUnit::Years).is_nan());
        assert!(c.principal(5.0, 0.05, cont, 1.0, TimeUnit::Years).is_nan());
        assert!(c.time(100.0, 5.0, 0.05, cont).is_nan());
    }

    #[test]
    fn test_ordinary_truncates_to_whole_months() {
        let c = calc(ORDINARY);
        assert_relative_eq!(c.year_fraction(59.0, TimeUnit::Days365), 30.0 / 360.0);
        assert_relative_eq!(c.year_fraction(60.0, TimeUnit::Days360), 60.0 / 360.0);
        assert_relative_eq!(c.year_fraction(2.0, TimeUnit::Months), 2.0 / 12.0);
    }
}
