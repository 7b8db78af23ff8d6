//! # TVM
//!
//! Time-value-of-money analytics in one dependency.
//!
//! This crate re-exports the component crates under short module names:
//!
//! - [`periods`]: compounding bases, time units, period conversion
//! - [`math`]: bisection and Newton-bisection root finders
//! - [`bonds`]: bond cash flows, pricing, yields, duration and convexity
//! - [`annuities`]: annuities, perpetuities, implied rates, simple interest
//!   and mortgages
//! - [`config`]: TOML engine configuration
//!
//! ## Example
//!
//! ```rust
//! use tvm::prelude::*;
//!
//! let config = EngineConfig::default();
//!
//! let bonds = config.bond_calculator().unwrap();
//! let terms = BondTerms::from_codes(1000.0, 10.0, 's', 10.0, 'y', DayBasis::Days365).unwrap();
//! let price = bonds.price(&terms, 11.0).unwrap();
//! assert!(price < 1000.0);
//!
//! let mortgage = config.mortgage().unwrap();
//! let cost = mortgage.cost(300_000.0, 0.03375, CompoundingBasis::Monthly, 30.0, TimeUnit::Years);
//! assert!((cost.payment - 1326.29).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use tvm_annuities as annuities;
pub use tvm_bonds as bonds;
pub use tvm_config as config;
pub use tvm_core as periods;
pub use tvm_math as math;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tvm_annuities::prelude::*;
    pub use tvm_bonds::prelude::*;
    pub use tvm_config::{ConfigError, EngineConfig, Validate};
    pub use tvm_core::prelude::*;
    pub use tvm_math::prelude::*;
}
