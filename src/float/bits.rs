//! Bit-level decomposition of binary64 values
//!
//! Every helper here reads the IEEE-754 fields directly through
//! [`f64::to_bits`]/[`f64::from_bits`]; none of them round.

use crate::constants::{DBL_DENORM_MIN, DBL_MIN};
use crate::error::{Error, Result};

/// Sign bit of an IEEE-754 binary64
pub const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
/// Biased exponent field
pub const EXP_MASK: u64 = 0x7FF0_0000_0000_0000;
/// Stored significand (without the implicit bit)
pub const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
/// Exponent bias
pub const EXP_BIAS: i32 = 1023;

/// 2^54, used to lift subnormals into the normal range
const TWO54: f64 = 18014398509481984.0;

/// Classification tag computed before any reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpClass {
    /// Not a number
    Nan,
    /// +∞
    PosInfinity,
    /// -∞
    NegInfinity,
    /// ±0
    Zero {
        /// Sign bit of the zero
        negative: bool,
    },
    /// Nonzero with a zero exponent field
    Subnormal,
    /// Any other finite value
    Normal,
}

impl FpClass {
    /// Returns true for NaN and both infinities
    #[inline]
    pub fn is_non_finite(&self) -> bool {
        matches!(
            self,
            FpClass::Nan | FpClass::PosInfinity | FpClass::NegInfinity
        )
    }
}

/// Classify `x` from its raw bit pattern.
#[inline]
pub fn classify(x: f64) -> FpClass {
    let bits = x.to_bits();
    let exp = bits & EXP_MASK;
    let mant = bits & MANTISSA_MASK;
    let negative = bits & SIGN_MASK != 0;

    match (exp, mant) {
        (EXP_MASK, 0) if negative => FpClass::NegInfinity,
        (EXP_MASK, 0) => FpClass::PosInfinity,
        (EXP_MASK, _) => FpClass::Nan,
        (0, 0) => FpClass::Zero { negative },
        (0, _) => FpClass::Subnormal,
        _ => FpClass::Normal,
    }
}

/// Returns true if the sign bit of `x` is set (including `-0.0` and negative NaN).
#[inline]
pub fn sign_bit(x: f64) -> bool {
    x.to_bits() & SIGN_MASK != 0
}

/// Return `|x|` carrying the sign of `y`.
///
/// Signed zeros in `y` are honoured. When `y` is NaN, `x` is returned unchanged.
#[inline]
pub fn copysign(x: f64, y: f64) -> f64 {
    if y.is_nan() {
        return x;
    }
    f64::from_bits((x.to_bits() & !SIGN_MASK) | (y.to_bits() & SIGN_MASK))
}

/// Decompose `x = m * 2^e` with `0.5 <= |m| < 1`.
///
/// `±0`, `±∞` and NaN come back as `(x, 0)`. Subnormals are normalised exactly.
pub fn frexp(x: f64) -> (f64, i32) {
    match classify(x) {
        FpClass::Normal => {
            let bits = x.to_bits();
            let biased = ((bits & EXP_MASK) >> 52) as i32;
            // Force the stored exponent to 1022 so the significand lands in [0.5, 1)
            let m = f64::from_bits((bits & !EXP_MASK) | (((EXP_BIAS - 1) as u64) << 52));
            (m, biased - (EXP_BIAS - 1))
        }
        FpClass::Subnormal => {
            let (m, e) = frexp(x * TWO54);
            (m, e - 54)
        }
        _ => (x, 0),
    }
}

/// Exact `2^k` for `-1022 <= k <= 1023` by exponentiation by squaring.
///
/// Every partial product is itself a power of two inside the normal range,
/// so no step rounds.
fn pow2_normal(k: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&k));
    let mut base = if k >= 0 { 2.0 } else { 0.5 };
    let mut n = k.unsigned_abs();
    let mut y = 1.0;
    while n != 0 {
        if n & 1 != 0 {
            y *= base;
        }
        n >>= 1;
        if n != 0 {
            base *= base;
        }
    }
    y
}

/// Compute `2^k` exactly.
///
/// - `k > 1023`: [`Error::Overflow`]
/// - `-1074 <= k < -1022`: exact subnormal, halving down from `DBL_MIN`
/// - `k < -1074`: `0.0`
pub fn pow2i(k: i32) -> Result<f64> {
    if k > 1023 {
        return Err(Error::overflow("pow2i", k));
    }
    if k < -1074 {
        return Ok(0.0);
    }
    if k >= -1022 {
        return Ok(pow2_normal(k));
    }
    // At most 52 halvings, each exact
    let mut y = DBL_MIN;
    for _ in 0..(-(k + 1022)) {
        y *= 0.5;
    }
    debug_assert!(k != -1074 || y == DBL_DENORM_MIN);
    Ok(y)
}

/// Compute `m * 2^e` with a single final rounding.
///
/// Large `|e|` is split so that no intermediate power of two leaves the
/// normal range; overflow and underflow only happen in the last multiply.
/// NaN, infinities and signed zeros pass through untouched.
pub fn ldexp(m: f64, e: i32) -> f64 {
    if !m.is_finite() || m == 0.0 {
        return m;
    }

    // 2^-1022 * 2^53: keeps the significand intact while stepping down
    const STEP_DOWN: i32 = -1022 + 53;

    let mut y = m;
    let mut n = e;
    if n > 1023 {
        y *= pow2_normal(1023);
        n -= 1023;
        if n > 1023 {
            y *= pow2_normal(1023);
            n -= 1023;
            n = n.min(1023);
        }
    } else if n < -1022 {
        y *= pow2_normal(STEP_DOWN);
        n -= STEP_DOWN;
        if n < -1022 {
            y *= pow2_normal(STEP_DOWN);
            n -= STEP_DOWN;
            n = n.max(-1022);
        }
    }
    y * pow2_normal(n)
}

/// Unbiased binary exponent of a finite nonzero `x`, i.e. `floor(log2 |x|)`.
///
/// Subnormals report their true exponent (down to -1074).
#[inline]
pub fn ilogb(x: f64) -> i32 {
    let (_, e) = frexp(x);
    e - 1
}
