//! Exponential
//!
//! # Algorithm
//!
//! ```text
//! (k, r) = reduce_ln2(x)                    r ∈ [-ln2/2, ln2/2]
//! h = r/2
//! P(h) = h·(15120 + 420h² + h⁴)             [5/5] Padé of e^h:
//! Q(h) = 30240 + 3360h² + 30h⁴              e^h = (Q + P) / (Q - P)
//! d = 2P / (Q - P)                          e^h = 1 + d
//! e^r = (1 + d)² = 1 + d·(2 + d)
//! exp(x) = e^r · 2^k                        2^k by exact exponentiation by squaring
//! ```
//!
//! Evaluating the approximant at `r/2` shrinks its truncation error by 2^11;
//! squaring as `1 + d(2 + d)` never forms `1 + d` on its own, so no bits of
//! `d` are lost before the final add.
//!
//! Results saturate to `+∞` above [`MAX_LOG`] and to `0` below [`MIN_LOG`].

use super::reduction::reduce_ln2;
use crate::algorithm::polynomial::horner;
use crate::constants::{MAX_LOG, MIN_LOG};
use crate::float::bits::ldexp;

/// Numerator odd part: `P(h) = h·(15120 + 420h² + h⁴)`, Horner in `h²`
const PADE_P: [f64; 3] = [15120.0, 420.0, 1.0];
/// Denominator even part: `Q(h) = 30240 + 3360h² + 30h⁴`, Horner in `h²`
const PADE_Q: [f64; 3] = [30240.0, 3360.0, 30.0];

/// `e^r - 1` for `|r| <= ln2/2`, without forming `e^r` first.
#[inline]
pub fn kernel_expm1(r: f64) -> f64 {
    let h = 0.5 * r;
    let h2 = h * h;
    let p = h * horner(&PADE_P, h2);
    let q = horner(&PADE_Q, h2);
    let d = 2.0 * p / (q - p);
    d * (2.0 + d)
}

/// Natural exponential.
///
/// `exp(NaN) = NaN`, `exp(+∞) = +∞`, `exp(-∞) = 0`.
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > MAX_LOG {
        return f64::INFINITY;
    }
    if x < MIN_LOG {
        return 0.0;
    }
    if x == 0.0 {
        return 1.0;
    }

    let red = reduce_ln2(x);
    let mut value = 1.0 + kernel_expm1(red.r);
    let mut k = red.k;

    // 2^±1024 is outside the normal range; move one factor of two into the kernel
    if k == 1024 {
        value *= 2.0;
        k = 1023;
    } else if k == -1024 {
        value *= 0.5;
        k = -1023;
    }

    ldexp(value, k)
}
