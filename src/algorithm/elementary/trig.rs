//! Sine, cosine and tangent from double-double range reduction
//!
//! # Algorithm
//!
//! ```text
//! (k, a + b) = reduce_pio2(x)                a + b ∈ [-π/4, π/4]
//! s0 = a + a·z·S(z), c0 = 1 + z·C(z)         z = a², Taylor to degree 17 / 16
//! sb = b - b³/6 + b⁵/120, cb = 1 - b²/2 + b⁴/24
//! s  = s0·cb + c0·sb                         sin(a + b)
//! c  = c0·cb - s0·sb                         cos(a + b)
//! quadrant q = k mod 4 selects (s, c), (c, -s), (-s, -c), (-c, s)
//! ```
//!
//! Remainders below 2^-40 skip the kernel: there `sin r = r` and
//! `cos r = 1` to full precision.
//!
//! Non-finite input gives NaN. `sin(±0) = ±0`, `cos(±0) = 1`, `tan(±0) = ±0`.

use super::reduction::reduce_pio2;
use crate::algorithm::polynomial::horner;
use crate::float::double_double::{DoubleDouble, compensated_div};

/// Remainders below this use `sin r = r`, `cos r = 1`
pub const STICKY_ZERO: f64 = 9.094947017729282e-13; // 2^-40

/// Taylor coefficients of `(sin(a) - a) / a³` in powers of `a²`
const SIN_COEFFS: [f64; 8] = [
    -1.66666666666666666666666666667e-01,
    8.33333333333333333333333333333e-03,
    -1.98412698412698412698412698413e-04,
    2.75573192239858906525573192240e-06,
    -2.50521083854417187750521083854e-08,
    1.60590438368216145993923771702e-10,
    -7.64716373181981647590113198579e-13,
    2.81145725434552076319894558301e-15,
];

/// Taylor coefficients of `(cos(a) - 1) / a²` in powers of `a²`
const COS_COEFFS: [f64; 8] = [
    -0.5,
    4.16666666666666666666666666667e-02,
    -1.38888888888888888888888888889e-03,
    2.48015873015873015873015873016e-05,
    -2.75573192239858906525573192240e-07,
    2.08767569878680989792100903212e-09,
    -1.14707455977297247138516979787e-11,
    4.77947733238738529743820749112e-14,
];

/// `(sin r, cos r)` for a reduced `r = a + b` in `[-π/4, π/4]`.
pub fn kernel_sincos(r: DoubleDouble) -> (f64, f64) {
    let a = r.hi;
    let b = r.lo;
    if (a + b).abs() < STICKY_ZERO {
        return (a + b, 1.0);
    }

    let z = a * a;
    let s0 = a + a * z * horner(&SIN_COEFFS, z);
    let c0 = 1.0 + z * horner(&COS_COEFFS, z);

    // Fold in the low word: |b| <= 2^-53·|a|, so O(b^5) is far below an ulp
    let b2 = b * b;
    let sb = b - b * b2 / 6.0 + b * b2 * b2 / 120.0;
    let cb = 1.0 - 0.5 * b2 + b2 * b2 / 24.0;

    (s0 * cb + c0 * sb, c0 * cb - s0 * sb)
}

/// Apply the quadrant table to kernel outputs.
#[inline]
pub(crate) fn reconstruct(quadrant: u8, s: f64, c: f64) -> (f64, f64) {
    match quadrant & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// Compute `(sin x, cos x)` with one reduction.
pub fn sincos(x: f64) -> (f64, f64) {
    if x == 0.0 {
        return (x, 1.0);
    }
    if !x.is_finite() {
        return (f64::NAN, f64::NAN);
    }
    let red = reduce_pio2(x);
    let (s, c) = kernel_sincos(red.r);
    reconstruct(red.quadrant, s, c)
}

/// Sine.
#[inline]
pub fn sin(x: f64) -> f64 {
    sincos(x).0
}

/// Cosine.
#[inline]
pub fn cos(x: f64) -> f64 {
    sincos(x).1
}

/// Tangent.
///
/// Even quadrants return `s / c` and odd quadrants `-c / s`, both as
/// compensated quotients. An exactly zero denominator is a pole and
/// yields NaN.
pub fn tan(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    if !x.is_finite() {
        return f64::NAN;
    }
    let red = reduce_pio2(x);
    let (s, c) = kernel_sincos(red.r);
    let (num, den, sign) = if red.quadrant & 1 == 0 {
        (s, c, 1.0)
    } else {
        (c, s, -1.0)
    };
    if den == 0.0 {
        return f64::NAN;
    }
    sign * compensated_div(num, den)
}
