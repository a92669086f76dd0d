//! Numerical algorithms
//!
//! - [`elementary`]: range-reduced kernels for the elementary transcendentals
//! - [`polynomial`]: Horner and Clenshaw evaluators shared by the kernels
//! - [`rootfinding`]: Newton-Raphson, used by `ln` to refine its seed
//! - [`differentiation`]: central differences with Richardson extrapolation
//!
//! Every function here is pure: no shared state, safe to call from any thread.

pub mod differentiation;
pub mod elementary;
pub mod polynomial;
pub mod rootfinding;

pub use differentiation::derivative_central;
pub use polynomial::{clenshaw, clenshaw_even, clenshaw_odd, horner};
pub use rootfinding::{NewtonOptions, NewtonResult, newton, newton_fd};
