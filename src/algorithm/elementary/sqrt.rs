//! Square root by Newton iteration
//!
//! # Algorithm
//!
//! ```text
//! (m, e) = frexp(x)              x = m·2^e, m ∈ [0.5, 1)
//! y0     = 2^floor(e/2)          within a factor of 2 of √x
//! y      = 0.5·(y + x/y)         never squares y, so no overflow near DBL_MAX
//! stop when |y - y_prev| <= tol·y
//! q = x/y, ρ = x - q·y               exact residual through two_product
//! y = ((y + q) + ρ/y) / 2            one compensated step on convergence
//! ```
//!
//! The compensated step is skipped outside `2^±960`, where the residual
//! would overflow or underflow. On budget exhaustion the last estimate is returned; `sqrt` never fails
//! for a valid argument.

use crate::float::bits::{frexp, ldexp};
use crate::float::double_double::{two_product, two_sum};

/// Binary exponent range in which the exact residual stays representable
const POLISH_EXPONENT: i32 = 960;

/// Configuration for [`sqrt_with`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtOptions {
    /// Relative step tolerance (default: 1e-15)
    pub tol: f64,

    /// Maximum number of Newton steps (default: 100)
    pub max_iter: usize,
}

impl Default for SqrtOptions {
    fn default() -> Self {
        Self {
            tol: 1e-15,
            max_iter: 100,
        }
    }
}

impl SqrtOptions {
    /// Set the relative step tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the iteration budget
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

/// Square root with the default options.
///
/// NaN → NaN, negative → NaN, `±0` → `±0`, `+∞` → `+∞`.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    sqrt_with(x, &SqrtOptions::default())
}

/// Square root with explicit tolerance and iteration budget.
pub fn sqrt_with(x: f64, opts: &SqrtOptions) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x == f64::INFINITY {
        return x;
    }

    let (_, e) = frexp(x);
    let mut y = ldexp(1.0, e.div_euclid(2));

    for _ in 0..opts.max_iter {
        let prev = y;
        y = 0.5 * (y + x / y);
        if (y - prev).abs() <= opts.tol * y {
            if e.abs() > POLISH_EXPONENT {
                return y;
            }
            return polish(x, y);
        }
    }

    tracing::debug!(x, y, max_iter = opts.max_iter, "sqrt: iteration budget exhausted");
    y
}

/// Newton step on a converged `y` with the quotient carried in double-double.
#[inline]
fn polish(x: f64, y: f64) -> f64 {
    let q = x / y;
    let (p, pe) = two_product(q, y);
    let q_lo = ((x - p) - pe) / y;
    let (s, se) = two_sum(y, q);
    0.5 * (s + (se + q_lo))
}
