//! # TVM Bonds
//!
//! Level-coupon bond analytics for the TVM time-value-of-money library.
//!
//! This crate provides:
//!
//! - **Cash flows**: [`BondTerms`] and [`bond_cash_flow`]
//! - **Pricing**: periodic and continuous discounting
//! - **Yields**: yield to maturity and to call by bisection, current yield,
//!   tax-equivalent yield
//! - **Risk**: Macaulay and modified duration, convexity
//!
//! ## Design Philosophy
//!
//! - **Plain Functions**: every analytic is a free function over a
//!   [`CashFlow`](tvm_core::CashFlow); [`BondCalculator`] only bundles the
//!   configuration
//! - **Percent In, Percent Out**: rates and yields are annual percentages
//! - **NaN, Not Panic**: unsupported bases and unsolvable prices give `NaN`
//!
//! ## Example
//!
//! ```rust
//! use tvm_bonds::prelude::*;
//! use tvm_core::{CompoundingBasis, TimeUnit};
//!
//! let cf = bond_cash_flow(1000.0, 10.0, CompoundingBasis::SemiAnnually, 10.0, TimeUnit::Years);
//! let p = price(&cf, 11.0, CompoundingBasis::SemiAnnually);
//! assert!((p - 940.2480875).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod calculator;
pub mod error;
pub mod pricing;
pub mod risk;
pub mod terms;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{BondAnalytics, BondCalculator};
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{price, price_continuous};
    pub use crate::risk::{
        convexity, convexity_continuous, duration, duration_at_rate, duration_continuous,
        macaulay_duration, macaulay_duration_continuous, modified_duration,
        modified_duration_at_rate, price_change_with_convexity,
    };
    pub use crate::terms::{bond_cash_flow, BondTerms};
    pub use crate::yields::{
        current_yield, tax_equivalent_yield, yield_to_call, yield_to_maturity,
        yield_to_maturity_continuous, YieldSolver,
    };
}

pub use calculator::{BondAnalytics, BondCalculator};
pub use error::{BondError, BondResult};
pub use pricing::{price, price_continuous};
pub use risk::{
    convexity, convexity_continuous, duration, duration_at_rate, duration_continuous,
    macaulay_duration, macaulay_duration_continuous, modified_duration, modified_duration_at_rate,
    price_change_with_convexity,
};
pub use terms::{bond_cash_flow, BondTerms};
pub use yields::{
    current_yield, tax_equivalent_yield, yield_to_call, yield_to_maturity,
    yield_to_maturity_continuous, YieldSolver,
};
