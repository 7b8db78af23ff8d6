//! # TVM Configuration
//!
//! Engine configuration for the TVM time-value-of-money analytics library.
//!
//! # Features
//!
//! - **Solver Settings**: tolerance and iteration caps for the bond yield
//!   bisection and the implied-rate Newton-bisection solver
//! - **Rate Bracket**: default search interval for implied annuity rates
//! - **Day Basis**: the year length selected by `'d'` codes
//! - **Validation**: every problem in a document is reported at once
//!
//! # Example
//!
//! ```rust
//! use tvm_config::{EngineConfig, Validate};
//!
//! let config = EngineConfig::from_toml_str(
//!     r#"
//!     [rate_solver]
//!     lower_pct = 1.0
//!     upper_pct = 30.0
//!     "#,
//! )
//! .unwrap();
//! assert!(config.is_valid());
//!
//! let annuities = config.annuities().unwrap();
//! assert_eq!(annuities.solver().max_iterations, 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod engine;
pub mod error;

pub use engine::{EngineConfig, PeriodsConfig, RateSolverConfig, YieldSolverConfig};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
