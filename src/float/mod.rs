//! Floating-point building blocks
//!
//! - [`bits`]: classification and exact binary-exponent manipulation
//! - [`rounding`]: integral rounding through IEEE addition
//! - [`double_double`]: error-free transforms and `hi + lo` arithmetic

pub mod bits;
pub mod double_double;
pub mod rounding;

pub use bits::{FpClass, classify, copysign, frexp, ilogb, ldexp, pow2i, sign_bit};
pub use double_double::{DoubleDouble, compensated_div, split, two_product, two_sum};
pub use rounding::{round_half_away_from_zero, round_half_even};
