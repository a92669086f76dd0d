//! Rounding to integral values using only IEEE addition
//!
//! Both functions return an integral `f64` so callers can keep reduction
//! multiples in floating point (no `as i64` saturation for huge inputs).

use super::bits::copysign;

/// 2^52: adding and subtracting it rounds any |x| < 2^52 to an integer
/// in the current (round-to-nearest-even) mode
const TWO52: f64 = 4503599627370496.0;

/// Round to the nearest integer, ties to even.
///
/// ```text
/// round_half_even(2.5)  == 2.0
/// round_half_even(3.5)  == 4.0
/// round_half_even(-2.5) == -2.0
/// ```
///
/// Values with `|x| >= 2^52` are already integral and are returned unchanged,
/// as are NaN and infinities. The sign of zero is preserved.
#[inline]
pub fn round_half_even(x: f64) -> f64 {
    let ax = x.abs();
    if ax >= TWO52 || ax.is_nan() {
        return x;
    }
    copysign((ax + TWO52) - TWO52, x)
}

/// Round to the nearest integer, ties away from zero.
///
/// ```text
/// round_half_away_from_zero(2.5)  == 3.0
/// round_half_away_from_zero(-2.5) == -3.0
/// ```
#[inline]
pub fn round_half_away_from_zero(x: f64) -> f64 {
    let ax = x.abs();
    if ax >= TWO52 || ax.is_nan() {
        return x;
    }
    let r = (ax + TWO52) - TWO52;
    // A tie that went down to even must go up instead
    let r = if r - ax == -0.5 { r + 1.0 } else { r };
    copysign(r, x)
}

/// Round `hi + lo` (a normalised double-double) to the nearest integer,
/// ties to even, resolving halfway cases with the low word.
///
/// A normalised low word is at most half an ulp of `hi`, so it can only
/// move the result when `hi` itself sits exactly on a half-integer.
pub fn round_half_even_dd(hi: f64, lo: f64) -> f64 {
    let k = round_half_even(hi);
    // Exact: both operands are within one unit of each other
    let d = hi - k;
    if d == 0.5 && lo > 0.0 {
        k + 1.0
    } else if d == -0.5 && lo < 0.0 {
        k - 1.0
    } else {
        k
    }
}

/// `k mod 4` for an integral `k`, in `0..4`.
///
/// Exact for every integral double; multiples beyond 2^54 are all 0 mod 4.
#[inline]
pub fn mod4(k: f64) -> u8 {
    let r = k % 4.0;
    let r = if r < 0.0 { r + 4.0 } else { r };
    r as u8
}
