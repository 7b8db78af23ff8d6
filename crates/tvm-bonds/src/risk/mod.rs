//! Interest-rate sensitivity of cash flows.
//!
//! - [`duration`]: Macaulay and modified duration, periodic and continuous
//! - [`convexity`]: second-order sensitivity, periodic and continuous
//!
//! Period-denominated results become years after dividing by the periods
//! per year (convexity by its square); the functions below that say
//! "years" have already done so.

pub mod convexity;
pub mod duration;

pub use convexity::{convexity, convexity_continuous, price_change_with_convexity};
pub use duration::{
    duration, duration_at_rate, duration_continuous, macaulay_duration,
    macaulay_duration_continuous, modified_duration, modified_duration_at_rate,
};
