//! # TVM Annuities
//!
//! Compound-interest, annuity and loan analytics for the TVM
//! time-value-of-money library.
//!
//! This crate provides:
//!
//! - **Lump sums**: future and present value, implied rate and term,
//!   depreciation
//! - **Annuities**: ordinary and due, level and growing, perpetuities
//! - **Implied Rates**: annuity rates by the Newton-bisection solver
//! - **Rates**: effective annual rate, compounding conversion, real and
//!   blended rates, average return
//! - **Simple Interest**: ordinary, banker's and accurate day counts
//! - **Mortgages**: payment, total cost and amortization tables
//!
//! ## Design Philosophy
//!
//! - **Fractions In, Fractions Out**: rates are decimal fractions, so 5% is
//!   `0.05`
//! - **One Term Convention**: every term is a count and a
//!   [`TimeUnit`](tvm_core::TimeUnit), converted by the shared
//!   [`PeriodConverter`](tvm_core::PeriodConverter)
//! - **NaN for Unsupported Bases**: closed forms that have no continuous
//!   version return `NaN`; only searches and tables return errors
//!
//! ## Example
//!
//! ```rust
//! use tvm_annuities::prelude::*;
//! use tvm_core::{CompoundingBasis, TimeUnit};
//!
//! let a = Annuities::default();
//! let fv = a.future_value(1000.0, 0.05, CompoundingBasis::Annually, 10.0, TimeUnit::Years);
//! assert!((fv - 1628.894627).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_arguments)]

pub mod annuity;
pub mod error;
pub mod growing;
pub mod implied;
pub mod mortgage;
pub mod rates;
pub mod simple_interest;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuity::{Annuities, PaymentTiming};
    pub use crate::error::{AnnuityError, AnnuityResult};
    pub use crate::implied::RateBracket;
    pub use crate::mortgage::{AmortizationRow, AmortizationSchedule, Mortgage, MortgageCost};
    pub use crate::rates::{
        average_rate_of_return, blended_rate, convert_compounding, ear_to_nominal,
        growth_decay_periods, nominal_to_ear, real_interest_rate,
    };
    pub use crate::simple_interest::{SimpleInterest, SimpleInterestBasis};
}

pub use annuity::{Annuities, PaymentTiming};
pub use error::{AnnuityError, AnnuityResult};
pub use implied::{RateBracket, DEFAULT_LOWER_PCT, DEFAULT_UPPER_PCT};
pub use mortgage::{AmortizationRow, AmortizationSchedule, Mortgage, MortgageCost};
pub use rates::{
    average_rate_of_return, blended_rate, convert_compounding, ear_to_nominal,
    growth_decay_periods, nominal_to_ear, real_interest_rate,
};
pub use simple_interest::{SimpleInterest, SimpleInterestBasis};
