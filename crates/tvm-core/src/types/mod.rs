//! Domain types for time-value-of-money calculations.
//!
//! This module provides:
//! - [`CompoundingBasis`]: how often interest is credited
//! - [`TimeUnit`]: the unit of an input time span
//! - [`DayBasis`]: 360- or 365-day year selection
//! - [`CashFlow`]: 1-indexed periodic payment sequence

mod cashflow;
mod compounding;

pub use cashflow::CashFlow;
pub use compounding::{CompoundingBasis, DayBasis, TimeUnit};
