//! Natural and arbitrary-base logarithms
//!
//! # Algorithm
//!
//! ```text
//! (m, e) = frexp(x)                       m ∈ [0.5, 1)
//! t      = m - 1
//! y0     = e·ln2 + (t - t²/2 + t³/3)      cubic log1p seed
//! y      = newton(f(y) = exp(y) - x, f'(y) = exp(y), y0)
//! ```
//!
//! Subnormal inputs are lifted by 2^54 and very large ones lowered by 2^-64
//! before seeding, so every `exp(y)` evaluation stays in the normal range.
//! The scale is added back as `n·LN2_HI + n·LN2_LO`.
//!
//! Because `exp` is the oracle, accuracy near `x = 1` is absolute
//! (about 1e-16) rather than relative. The crate-internal `ln_1p` keeps
//! relative accuracy for small `u` by solving `expm1(y) = u` instead.

use super::exp::{exp, kernel_expm1};
use crate::algorithm::rootfinding::{NewtonOptions, newton};
use crate::constants::{LN2, LN2_HI, LN2_LO, LN10};
use crate::error::{Error, Result};
use crate::float::bits::{FpClass, classify, frexp, ilogb, ldexp};

/// Unbiased exponent from which the argument is scaled down first
const LARGE_EXPONENT: i32 = 1020;
/// Scale for subnormal inputs
const SUBNORMAL_SHIFT: i32 = 54;
/// Scale for large inputs
const LARGE_SHIFT: i32 = 64;
/// `ln_1p` solves on `expm1` inside `[e^(-ln2/2) - 1, e^(ln2/2) - 1]`
const LN_1P_LOWER: f64 = -0.29;
const LN_1P_UPPER: f64 = 0.41;

/// Natural logarithm with default Newton options.
///
/// `ln(NaN) = NaN`, `ln(+∞) = +∞`, `ln(±0) = -∞`, `ln(1) = 0`.
///
/// # Errors
///
/// - [`Error::Domain`] for `x < 0`
/// - [`Error::Convergence`] if the Newton refinement fails
#[inline]
pub fn ln(x: f64) -> Result<f64> {
    ln_with(x, &NewtonOptions::default())
}

/// Natural logarithm with explicit Newton options.
pub fn ln_with(x: f64, opts: &NewtonOptions) -> Result<f64> {
    let class = classify(x);
    match class {
        FpClass::Nan | FpClass::PosInfinity => return Ok(x),
        FpClass::Zero { .. } => return Ok(f64::NEG_INFINITY),
        _ if x < 0.0 => return Err(Error::domain("ln", x, "argument must be non-negative")),
        _ if x == 1.0 => return Ok(0.0),
        _ => {}
    }

    let (x, shift) = match class {
        FpClass::Subnormal => (ldexp(x, SUBNORMAL_SHIFT), -SUBNORMAL_SHIFT),
        _ if ilogb(x) >= LARGE_EXPONENT => (ldexp(x, -LARGE_SHIFT), LARGE_SHIFT),
        _ => (x, 0),
    };

    let (m, e) = frexp(x);
    let t = m - 1.0;
    let seed = t - t * t / 2.0 + t * t * t / 3.0;
    let y0 = f64::from(e) * LN2 + seed;

    let refined = newton(|y| exp(y) - x, exp, y0, opts)?;

    let n = f64::from(shift);
    Ok(refined.root + (n * LN2_HI + n * LN2_LO))
}

/// Logarithm of `x` in base `base`, computed as `ln(x) / ln(base)`.
///
/// A NaN base gives NaN once `x` itself is in domain.
///
/// # Errors
///
/// - [`Error::Domain`] for `x < 0`, `base <= 0` or `base == 1`
/// - [`Error::Convergence`] if either Newton refinement fails
pub fn log(x: f64, base: f64) -> Result<f64> {
    let lx = ln(x)?;
    if base.is_nan() {
        return Ok(f64::NAN);
    }
    if base <= 0.0 {
        return Err(Error::domain("log", base, "base must be positive"));
    }
    if base == 1.0 {
        return Err(Error::domain("log", base, "base must not be 1"));
    }
    Ok(lx / ln(base)?)
}

/// Base-2 logarithm.
#[inline]
pub fn log2(x: f64) -> Result<f64> {
    Ok(ln(x)? / LN2)
}

/// Base-10 logarithm.
#[inline]
pub fn log10(x: f64) -> Result<f64> {
    Ok(ln(x)? / LN10)
}

/// `ln` for arguments already known to be in-domain; any failure becomes NaN.
#[inline]
pub(crate) fn ln_or_nan(x: f64) -> f64 {
    ln(x).unwrap_or(f64::NAN)
}

/// `ln(1 + u)` accurate relative to the result for small `u`.
///
/// Inside the `expm1` kernel's range this runs Newton on
/// `kernel_expm1(y) - u`; elsewhere it falls back to `ln(1 + u)`.
pub(crate) fn ln_1p(u: f64) -> f64 {
    if u == 0.0 {
        return u;
    }
    if !(LN_1P_LOWER..=LN_1P_UPPER).contains(&u) {
        return ln_or_nan(1.0 + u);
    }
    let seed = u - u * u / 2.0 + u * u * u / 3.0;
    newton(
        |y| kernel_expm1(y) - u,
        |y| 1.0 + kernel_expm1(y),
        seed,
        &NewtonOptions::default(),
    )
    .map_or(f64::NAN, |r| r.root)
}
