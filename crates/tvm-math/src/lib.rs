//! # TVM Math
//!
//! Numerical root finders for the TVM time-value-of-money analytics library.
//!
//! This crate provides:
//!
//! - **Yield bisection**: bracket-expanding bisection for decreasing
//!   objectives such as price as a function of yield
//! - **Newton-bisection**: derivative-driven solver on a caller-supplied
//!   bracket, used for implied annuity rates
//!
//! ## Design Philosophy
//!
//! - **Bounded Work**: every solver has a hard iteration cap
//! - **Explicit Failure Policy**: the yield bisection always returns an
//!   estimate, the Newton-bisection solver reports failures as [`MathError`]
//! - **Closures**: objectives are plain closures, derivatives are returned
//!   alongside values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::needless_pass_by_value)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        decreasing_bisection, newton_bisection, BisectionConfig, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
