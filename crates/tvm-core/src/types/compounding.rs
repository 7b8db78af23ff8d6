//! Compounding basis, time unit and day basis types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Length of the year used when a span is expressed in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayBasis {
    /// 360-day year (banker's year)
    Days360,
    /// 365-day year
    #[default]
    Days365,
}

impl DayBasis {
    /// Returns the number of days in the year.
    #[must_use]
    pub fn days(&self) -> f64 {
        match self {
            DayBasis::Days360 => 360.0,
            DayBasis::Days365 => 365.0,
        }
    }

    /// Builds a day basis from a day count.
    pub fn from_days(days: u32) -> CoreResult<Self> {
        match days {
            360 => Ok(DayBasis::Days360),
            365 => Ok(DayBasis::Days365),
            _ => Err(CoreError::InvalidDayBasis { days }),
        }
    }
}

impl fmt::Display for DayBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayBasis::Days360 => "360",
            DayBasis::Days365 => "365",
        };
        write!(f, "{name}")
    }
}

/// How often interest is credited per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompoundingBasis {
    /// Once per year
    Annually,
    /// Twice per year
    #[default]
    SemiAnnually,
    /// Four times per year
    Quarterly,
    /// Twelve times per year
    Monthly,
    /// 52 times per year
    Weekly,
    /// Daily on a 360-day year
    Daily360,
    /// Daily on a 365-day year
    Daily365,
    /// Continuous compounding
    Continuous,
}

impl CompoundingBasis {
    /// All bases, in UI order.
    pub const ALL: [CompoundingBasis; 8] = [
        CompoundingBasis::Annually,
        CompoundingBasis::SemiAnnually,
        CompoundingBasis::Quarterly,
        CompoundingBasis::Monthly,
        CompoundingBasis::Weekly,
        CompoundingBasis::Daily360,
        CompoundingBasis::Daily365,
        CompoundingBasis::Continuous,
    ];

    /// Returns the number of compounding periods per year.
    ///
    /// Continuous has no discrete period and returns 0, so dividing a rate
    /// by it propagates infinity or NaN to the caller.
    #[must_use]
    pub fn periods_per_year(&self) -> i32 {
        match self {
            CompoundingBasis::Annually => 1,
            CompoundingBasis::SemiAnnually => 2,
            CompoundingBasis::Quarterly => 4,
            CompoundingBasis::Monthly => 12,
            CompoundingBasis::Weekly => 52,
            CompoundingBasis::Daily360 => 360,
            CompoundingBasis::Daily365 => 365,
            CompoundingBasis::Continuous => 0,
        }
    }

    /// Returns the day-year length for daily bases.
    #[must_use]
    pub fn days_per_year(&self) -> Option<f64> {
        match self {
            CompoundingBasis::Daily360 => Some(360.0),
            CompoundingBasis::Daily365 => Some(365.0),
            _ => None,
        }
    }

    /// Returns true for continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, CompoundingBasis::Continuous)
    }

    /// Returns true for either daily basis.
    #[must_use]
    pub fn is_daily(&self) -> bool {
        matches!(self, CompoundingBasis::Daily360 | CompoundingBasis::Daily365)
    }

    /// Returns the time unit whose span is one compounding period.
    #[must_use]
    pub fn matching_time_unit(&self) -> Option<TimeUnit> {
        match self {
            CompoundingBasis::Annually => Some(TimeUnit::Years),
            CompoundingBasis::SemiAnnually => Some(TimeUnit::Semiyears),
            CompoundingBasis::Quarterly => Some(TimeUnit::Quarters),
            CompoundingBasis::Monthly => Some(TimeUnit::Months),
            CompoundingBasis::Weekly => Some(TimeUnit::Weeks),
            CompoundingBasis::Daily360 => Some(TimeUnit::Days360),
            CompoundingBasis::Daily365 => Some(TimeUnit::Days365),
            CompoundingBasis::Continuous => None,
        }
    }

    /// Maps a single-character UI code to a basis.
    ///
    /// `'d'` resolves to the daily basis selected by `day_basis`.
    pub fn from_code(code: char, day_basis: DayBasis) -> CoreResult<Self> {
        match code.to_ascii_lowercase() {
            'a' => Ok(CompoundingBasis::Annually),
            's' => Ok(CompoundingBasis::SemiAnnually),
            'q' => Ok(CompoundingBasis::Quarterly),
            'm' => Ok(CompoundingBasis::Monthly),
            'w' => Ok(CompoundingBasis::Weekly),
            'd' => Ok(match day_basis {
                DayBasis::Days360 => CompoundingBasis::Daily360,
                DayBasis::Days365 => CompoundingBasis::Daily365,
            }),
            'c' => Ok(CompoundingBasis::Continuous),
            _ => Err(CoreError::unknown_compounding(code)),
        }
    }

    /// Label for a count of periods at this basis, e.g. "month(s)".
    #[must_use]
    pub fn period_label(&self) -> &'static str {
        match self.matching_time_unit() {
            Some(unit) => unit.label(),
            None => "continuous",
        }
    }
}

impl fmt::Display for CompoundingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingBasis::Annually => "Annually",
            CompoundingBasis::SemiAnnually => "Semi-Annually",
            CompoundingBasis::Quarterly => "Quarterly",
            CompoundingBasis::Monthly => "Monthly",
            CompoundingBasis::Weekly => "Weekly",
            CompoundingBasis::Daily360 => "Daily (360)",
            CompoundingBasis::Daily365 => "Daily (365)",
            CompoundingBasis::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

/// Unit of an input time span, before it is normalized to periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeUnit {
    /// Years
    #[default]
    Years,
    /// Half years
    Semiyears,
    /// Quarters
    Quarters,
    /// Months
    Months,
    /// Weeks
    Weeks,
    /// Days on a 360-day year
    Days360,
    /// Days on a 365-day year
    Days365,
}

impl TimeUnit {
    /// Returns how many of this unit make up one year.
    #[must_use]
    pub fn per_year(&self) -> f64 {
        match self {
            TimeUnit::Years => 1.0,
            TimeUnit::Semiyears => 2.0,
            TimeUnit::Quarters => 4.0,
            TimeUnit::Months => 12.0,
            TimeUnit::Weeks => 52.0,
            TimeUnit::Days360 => 360.0,
            TimeUnit::Days365 => 365.0,
        }
    }

    /// Returns true for either day unit.
    #[must_use]
    pub fn is_days(&self) -> bool {
        matches!(self, TimeUnit::Days360 | TimeUnit::Days365)
    }

    /// Returns the day-year length for day units.
    #[must_use]
    pub fn days_per_year(&self) -> Option<f64> {
        match self {
            TimeUnit::Days360 => Some(360.0),
            TimeUnit::Days365 => Some(365.0),
            _ => None,
        }
    }

    /// Maps a single-character UI code to a time unit.
    ///
    /// `'d'` resolves to the day unit selected by `day_basis`.
    pub fn from_code(code: char, day_basis: DayBasis) -> CoreResult<Self> {
        match code.to_ascii_lowercase() {
            'y' => Ok(TimeUnit::Years),
            's' => Ok(TimeUnit::Semiyears),
            'q' => Ok(TimeUnit::Quarters),
            'm' => Ok(TimeUnit::Months),
            'w' => Ok(TimeUnit::Weeks),
            'd' => Ok(match day_basis {
                DayBasis::Days360 => TimeUnit::Days360,
                DayBasis::Days365 => TimeUnit::Days365,
            }),
            _ => Err(CoreError::unknown_time_unit(code)),
        }
    }

    /// Plural-agnostic label, e.g. "year(s)".
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Years => "year(s)",
            TimeUnit::Semiyears => "semiyear(s)",
            TimeUnit::Quarters => "quarter(s)",
            TimeUnit::Months => "month(s)",
            TimeUnit::Weeks => "week(s)",
            TimeUnit::Days360 | TimeUnit::Days365 => "day(s)",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Years => "Years",
            TimeUnit::Semiyears => "Semiyears",
            TimeUnit::Quarters => "Quarters",
            TimeUnit::Months => "Months",
            TimeUnit::Weeks => "Weeks",
            TimeUnit::Days360 => "Days (360)",
            TimeUnit::Days365 => "Days (365)",
        };
        write!(f, "{name}")
    }
}
