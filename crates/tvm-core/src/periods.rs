//! Conversion of time spans into compounding periods.
//!
//! A span such as "6.5 years" must be restated as a count of the basis'
//! periods ("26 quarters") before any discounting happens. The factor table
//! is fixed; only the length of a day-year is caller-selectable.
//!
//! # Example
//!
//! ```rust
//! use tvm_core::periods::{periodic_rate, periods_for};
//! use tvm_core::types::{CompoundingBasis, TimeUnit};
//!
//! let n = periods_for(6.5, TimeUnit::Years, CompoundingBasis::Quarterly, 365.0);
//! assert_eq!(n, 26.0);
//!
//! let i = periodic_rate(0.08, CompoundingBasis::Monthly.periods_per_year());
//! assert!((i - 0.08 / 12.0).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{CompoundingBasis, DayBasis, TimeUnit};

/// Largest number of periods a cash flow or amortization table is built
/// for. Daily compounding over 270 years still fits.
pub const MAX_PERIODS: usize = 100_000;

/// Months in a year.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Quarters in a year.
pub const QUARTERS_PER_YEAR: f64 = 4.0;
/// Weeks in a year.
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Half years in a year.
pub const SEMIYEARS_PER_YEAR: f64 = 2.0;
/// Months in a half year.
pub const MONTHS_PER_SEMIYEAR: f64 = 6.0;
/// Quarters in a half year.
pub const QUARTERS_PER_SEMIYEAR: f64 = 2.0;
/// Weeks in a half year.
pub const WEEKS_PER_SEMIYEAR: f64 = 26.0;
/// Days in a half year.
pub const DAYS_PER_SEMIYEAR: f64 = 180.0;
/// Months in a quarter.
pub const MONTHS_PER_QUARTER: f64 = 3.0;
/// Weeks in a quarter.
pub const WEEKS_PER_QUARTER: f64 = 12.0;
/// Days in a quarter.
pub const DAYS_PER_QUARTER: f64 = 90.0;
/// Weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.0;
/// Days in a month.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Days in a week.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Restates `n` units of `unit` as a count of `basis` compounding periods.
///
/// `days_per_year` is only consulted for conversions between years and days.
/// A time unit that already matches the basis returns `n` unchanged.
/// Continuous compounding has no discrete period and yields `NaN`.
#[must_use]
pub fn periods_for(
    n: f64,
    unit: TimeUnit,
    basis: CompoundingBasis,
    days_per_year: f64,
) -> f64 {
    use CompoundingBasis as B;
    use TimeUnit as U;

    match (basis, unit) {
        (B::Continuous, _) => f64::NAN,

        (B::Annually, U::Years) => n,
        (B::Annually, U::Semiyears) => n / SEMIYEARS_PER_YEAR,
        (B::Annually, U::Quarters) => n / QUARTERS_PER_YEAR,
        (B::Annually, U::Months) => n / MONTHS_PER_YEAR,
        (B::Annually, U::Weeks) => n / WEEKS_PER_YEAR,
        (B::Annually, U::Days360 | U::Days365) => n / days_per_year,

        (B::SemiAnnually, U::Years) => n * SEMIYEARS_PER_YEAR,
        (B::SemiAnnually, U::Semiyears) => n,
        (B::SemiAnnually, U::Quarters) => n / QUARTERS_PER_SEMIYEAR,
        (B::SemiAnnually, U::Months) => n / MONTHS_PER_SEMIYEAR,
        (B::SemiAnnually, U::Weeks) => n / WEEKS_PER_SEMIYEAR,
        (B::SemiAnnually, U::Days360 | U::Days365) => n / DAYS_PER_SEMIYEAR,

        (B::Quarterly, U::Years) => n * QUARTERS_PER_YEAR,
        (B::Quarterly, U::Semiyears) => n * QUARTERS_PER_SEMIYEAR,
        (B::Quarterly, U::Quarters) => n,
        (B::Quarterly, U::Months) => n / MONTHS_PER_QUARTER,
        (B::Quarterly, U::Weeks) => n / WEEKS_PER_QUARTER,
        (B::Quarterly, U::Days360 | U::Days365) => n / DAYS_PER_QUARTER,

        (B::Monthly, U::Years) => n * MONTHS_PER_YEAR,
        (B::Monthly, U::Semiyears) => n * MONTHS_PER_SEMIYEAR,
        (B::Monthly, U::Quarters) => n * MONTHS_PER_QUARTER,
        (B::Monthly, U::Months) => n,
        (B::Monthly, U::Weeks) => n / WEEKS_PER_MONTH,
        (B::Monthly, U::Days360 | U::Days365) => n / DAYS_PER_MONTH,

        (B::Weekly, U::Years) => n * WEEKS_PER_YEAR,
        (B::Weekly, U::Semiyears) => n * WEEKS_PER_SEMIYEAR,
        (B::Weekly, U::Quarters) => n * WEEKS_PER_QUARTER,
        (B::Weekly, U::Months) => n * WEEKS_PER_MONTH,
        (B::Weekly, U::Weeks) => n,
        (B::Weekly, U::Days360 | U::Days365) => n / DAYS_PER_WEEK,

        (B::Daily360 | B::Daily365, U::Years) => n * days_per_year,
        (B::Daily360 | B::Daily365, U::Semiyears) => n * DAYS_PER_SEMIYEAR,
        (B::Daily360 | B::Daily365, U::Quarters) => n * DAYS_PER_QUARTER,
        (B::Daily360 | B::Daily365, U::Months) => n * DAYS_PER_MONTH,
        (B::Daily360 | B::Daily365, U::Weeks) => n * DAYS_PER_WEEK,
        (B::Daily360 | B::Daily365, U::Days360 | U::Days365) => n,
    }
}

/// Divides a nominal annual rate by the number of periods per year.
///
/// No guard on `periods_per_year`: zero (continuous) propagates as
/// infinity or `NaN`.
#[must_use]
pub fn periodic_rate(annual_rate: f64, periods_per_year: i32) -> f64 {
    annual_rate / f64::from(periods_per_year)
}

/// Period converter shared by the bond and annuity calculators.
///
/// Holds the only configurable input of the conversion table, the default
/// length of a day-year, and resolves it against day-based units and bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodConverter {
    day_basis: DayBasis,
}

impl PeriodConverter {
    /// Creates a converter using `day_basis` when no day unit or daily
    /// basis pins the year length.
    #[must_use]
    pub fn new(day_basis: DayBasis) -> Self {
        Self { day_basis }
    }

    /// Returns the configured day basis.
    #[must_use]
    pub fn day_basis(&self) -> DayBasis {
        self.day_basis
    }

    /// Year length for a conversion between `unit` and `basis`.
    ///
    /// A day unit wins over a daily basis, which wins over the default.
    #[must_use]
    pub fn days_per_year(&self, unit: TimeUnit, basis: CompoundingBasis) -> f64 {
        unit.days_per_year()
            .or_else(|| basis.days_per_year())
            .unwrap_or_else(|| self.day_basis.days())
    }

    /// Restates `n` units of `unit` as `basis` periods.
    #[must_use]
    pub fn periods(&self, n: f64, unit: TimeUnit, basis: CompoundingBasis) -> f64 {
        periods_for(n, unit, basis, self.days_per_year(unit, basis))
    }

    /// Whole periods in the span, truncated toward zero.
    ///
    /// `NaN` or negative spans produce zero; spans beyond `usize` saturate.
    #[must_use]
    pub fn whole_periods(&self, n: f64, unit: TimeUnit, basis: CompoundingBasis) -> usize {
        self.periods(n, unit, basis).trunc() as usize
    }

    /// Whole periods in the span, rejecting counts above [`MAX_PERIODS`].
    ///
    /// Infinite spans are rejected; `NaN` or negative spans produce zero.
    pub fn bounded_periods(
        &self,
        n: f64,
        unit: TimeUnit,
        basis: CompoundingBasis,
    ) -> CoreResult<usize> {
        let periods = self.periods(n, unit, basis);
        if periods >= (MAX_PERIODS + 1) as f64 {
            return Err(CoreError::too_many_periods(periods, MAX_PERIODS));
        }
        Ok(periods.trunc() as usize)
    }

    /// Periodic rate for `basis`; `NaN`/infinite for continuous.
    #[must_use]
    pub fn periodic_rate(&self, annual_rate: f64, basis: CompoundingBasis) -> f64 {
        periodic_rate(annual_rate, basis.periods_per_year())
    }

    /// Restates `n` units of `unit` as years.
    #[must_use]
    pub fn years(&self, n: f64, unit: TimeUnit) -> f64 {
        n / unit.per_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const DISCRETE: [CompoundingBasis; 7] = [
        CompoundingBasis::Annually,
        CompoundingBasis::SemiAnnually,
        CompoundingBasis::Quarterly,
        CompoundingBasis::Monthly,
        CompoundingBasis::Weekly,
        CompoundingBasis::Daily360,
        CompoundingBasis::Daily365,
    ];

    #[test]
    fn test_same_unit_is_identity() {
        for basis in DISCRETE {
            let unit = basis.matching_time_unit().unwrap();
            assert_eq!(periods_for(7.25, unit, basis, 365.0), 7.25);
        }
    }

    #[test]
    fn test_factor_table() {
        use CompoundingBasis as B;
        use TimeUnit as U;

        assert_eq!(periods_for(20.0, U::Years, B::Monthly, 365.0), 240.0);
        assert_eq!(periods_for(6.5, U::Years, B::Quarterly, 365.0), 26.0);
        assert_eq!(periods_for(30.0, U::Months, B::SemiAnnually, 365.0), 5.0);
        assert_eq!(periods_for(9.0, U::Months, B::Quarterly, 365.0), 3.0);
        assert_eq!(periods_for(8.0, U::Weeks, B::Monthly, 365.0), 2.0);
        assert_eq!(periods_for(24.0, U::Weeks, B::Quarterly, 365.0), 2.0);
        assert_eq!(periods_for(3.0, U::Months, B::Weekly, 365.0), 12.0);
        assert_eq!(periods_for(90.0, U::Days365, B::Monthly, 365.0), 3.0);
        assert_eq!(periods_for(180.0, U::Days360, B::Quarterly, 360.0), 2.0);
        assert_eq!(periods_for(21.0, U::Days365, B::Weekly, 365.0), 3.0);
        assert_eq!(periods_for(2.0, U::Semiyears, B::Daily360, 360.0), 360.0);
        assert_eq!(periods_for(1.0, U::Years, B::Weekly, 365.0), 52.0);
    }

    #[test]
    fn test_days_per_year_is_selectable() {
        use CompoundingBasis as B;
        use TimeUnit as U;

        assert_relative_eq!(periods_for(730.0, U::Days365, B::Annually, 365.0), 2.0);
        assert_relative_eq!(periods_for(720.0, U::Days360, B::Annually, 360.0), 2.0);
        assert_eq!(periods_for(2.0, U::Years, B::Daily360, 360.0), 720.0);
        assert_eq!(periods_for(2.0, U::Years, B::Daily365, 365.0), 730.0);
    }

    #[test]
    fn test_continuous_is_nan() {
        for unit in [TimeUnit::Years, TimeUnit::Months, TimeUnit::Days365] {
            assert!(periods_for(1.0, unit, CompoundingBasis::Continuous, 365.0).is_nan());
        }
    }

    #[test]
    fn test_periodic_rate() {
        assert_relative_eq!(periodic_rate(0.08, 12), 0.08 / 12.0);
        assert_relative_eq!(periodic_rate(10.0, 2), 5.0);
        // Continuous propagates rather than panicking
        assert!(periodic_rate(0.08, 0).is_infinite());
        assert!(periodic_rate(0.0, 0).is_nan());
    }

    #[test]
    fn test_converter_resolves_day_year() {
        let conv = PeriodConverter::new(DayBasis::Days360);
        assert_eq!(
            conv.days_per_year(TimeUnit::Years, CompoundingBasis::Annually),
            360.0
        );
        assert_eq!(
            conv.days_per_year(TimeUnit::Days365, CompoundingBasis::Annually),
            365.0
        );
        assert_eq!(
            conv.days_per_year(TimeUnit::Years, CompoundingBasis::Daily365),
            365.0
        );
        assert_eq!(
            conv.periods(1.0, TimeUnit::Years, CompoundingBasis::Daily365),
            365.0
        );
    }

    #[test]
    fn test_whole_periods() {
        let conv = PeriodConverter::default();
        assert_eq!(
            conv.whole_periods(3.5, TimeUnit::Years, CompoundingBasis::SemiAnnually),
            7
        );
        assert_eq!(
            conv.whole_periods(5.0, TimeUnit::Months, CompoundingBasis::Annually),
            0
        );
        assert_eq!(
            conv.whole_periods(1.0, TimeUnit::Years, CompoundingBasis::Continuous),
            0
        );
    }

    #[test]
    fn test_bounded_periods() {
        let conv = PeriodConverter::default();
        assert_eq!(
            conv.bounded_periods(30.0, TimeUnit::Years, CompoundingBasis::Monthly),
            Ok(360)
        );
        assert_eq!(
            conv.bounded_periods(100_000.0, TimeUnit::Days365, CompoundingBasis::Daily365),
            Ok(MAX_PERIODS)
        );
        assert_eq!(
            conv.bounded_periods(f64::NAN, TimeUnit::Years, CompoundingBasis::Annually),
            Ok(0)
        );
        assert!(matches!(
            conv.bounded_periods(f64::INFINITY, TimeUnit::Years, CompoundingBasis::Annually),
            Err(CoreError::TooManyPeriods { max: MAX_PERIODS, .. })
        ));
        assert!(conv
            .bounded_periods(1e30, TimeUnit::Years, CompoundingBasis::Annually)
            .is_err());
        assert!(conv
            .bounded_periods(300.0, TimeUnit::Years, CompoundingBasis::Daily365)
            .is_err());
    }

    proptest! {
        #[test]
        fn prop_years_round_trip_through_each_basis(years in 0.0f64..100.0) {
            let conv = PeriodConverter::default();
            for basis in DISCRETE {
                let periods = conv.periods(years, TimeUnit::Years, basis);
                let back = periods / f64::from(basis.periods_per_year());
                prop_assert!((back - years).abs() < 1e-9);
            }
        }
    }
}
