//! # transcendr
//!
//! **IEEE-754 elementary functions from first principles, with switchable backends.**
//!
//! transcendr reimplements sine, cosine, tangent, exp, ln, sqrt and the hyperbolic
//! family using only `+ - × ÷` on `f64`, matching the host math library to within
//! a few ULPs. A caller picks a trigonometric backend through an explicit,
//! immutable [`runtime::NumericsConfig`] instead of a global switch.
//!
//! ## Why transcendr?
//!
//! - **Deterministic**: no FMA, no host libm in the pure path, identical bits on every target
//! - **Double-double inside**: error-free transforms carry ~106 bits through reduction
//! - **Thread-safe by construction**: every kernel is a pure function
//!
//! ## Features
//!
//! - **Trigonometry**: `sin`, `cos`, `tan`, `sincos` (double-double and Chebyshev kernels)
//! - **Exponential / logarithm**: `exp`, `ln`, `log(x, base)`, `log2`, `log10`
//! - **Roots and norms**: `sqrt`, `hypot`, `hypot_iter`
//! - **Hyperbolic**: `sinh`, `cosh`, `tanh`, `asinh`, `acosh`, `atanh`
//! - **Building blocks**: `frexp`/`ldexp`/`pow2i`, ties-to-even rounding, double-double
//!   arithmetic, Horner/Clenshaw evaluation, Newton-Raphson, Richardson differentiation
//!
//! ## Quick Start
//!
//! ```rust
//! use transcendr::prelude::*;
//!
//! let cfg = NumericsConfig::new(BackendKind::Pure);
//! let (s, c) = cfg.sincos(1.0);
//! assert!((s * s + c * c - 1.0).abs() < 1e-15);
//!
//! assert_eq!(exp(0.0), 1.0);
//! assert_eq!(sqrt(4.0), 2.0);
//! assert!(ln(-1.0).is_err());
//! ```
//!
//! ## Error Policy
//!
//! Trig, exp, sqrt and the hyperbolics never fail: out-of-domain and
//! non-finite input maps to NaN, ∞ or 0. `ln`/`log` and Newton return
//! [`error::Result`] with structured [`error::Error`] payloads.
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`] at `trace`/`debug` level. The crate
//! never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod constants;
pub mod error;
pub mod float;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::elementary::{
        SqrtOptions, acosh, asinh, atanh, cos, cosh, exp, hypot, hypot_iter, ln, log, log2,
        log10, sin, sincos, sinh, sqrt, tan, tanh,
    };
    pub use crate::algorithm::rootfinding::{NewtonOptions, newton, newton_fd};
    pub use crate::error::{Error, Result};
    pub use crate::runtime::{
        BackendKind, ChebyshevBackend, NumericsConfig, PureBackend, SystemBackend, TrigBackend,
    };
}
