//! # TVM Core
//!
//! Core types for the TVM time-value-of-money analytics library.
//!
//! This crate provides the building blocks used throughout TVM:
//!
//! - **Types**: [`CompoundingBasis`], [`TimeUnit`], [`DayBasis`], [`CashFlow`]
//! - **Periods**: conversion of time spans into compounding periods and of
//!   nominal annual rates into periodic rates
//!
//! ## Design Philosophy
//!
//! - **Closed Enumerations**: every unit conversion is an exhaustive match
//! - **NaN Propagation**: unsupported numeric combinations yield `NaN`
//!   instead of panicking; only malformed requests return errors
//! - **Value Types**: nothing here holds shared mutable state
//!
//! ## Example
//!
//! ```rust
//! use tvm_core::prelude::*;
//!
//! let basis = CompoundingBasis::from_code('q', DayBasis::Days365).unwrap();
//! let periods = PeriodConverter::default().periods(3.0, TimeUnit::Years, basis);
//! assert_eq!(periods, 12.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod periods;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::periods::{periodic_rate, periods_for, PeriodConverter, MAX_PERIODS};
    pub use crate::types::{CashFlow, CompoundingBasis, DayBasis, TimeUnit};
}

pub use error::{CoreError, CoreResult};
pub use periods::{periodic_rate, periods_for, PeriodConverter, MAX_PERIODS};
pub use types::{CashFlow, CompoundingBasis, DayBasis, TimeUnit};
