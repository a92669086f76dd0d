//! Argument reduction
//!
//! Three reductions feed the kernels:
//!
//! - [`reduce_pio2`]: `x = k·(π/2) + r`, `r ∈ [-π/4, π/4]` in double-double
//! - [`reduce_two_pi`]: `x = k·2π + r`, `r ∈ [-π, π]` (three-part Cody-Waite)
//! - [`reduce_ln2`]: `x = k·ln 2 + r`, `r ∈ [-ln2/2, ln2/2]` (two-part Cody-Waite)
//!
//! # Algorithm (π/2)
//!
//! ```text
//! y      = x·(2/π)                 via two_product on the hi/lo split of 2/π
//! k      = round_half_even(y)      low word breaks exact ties
//! r      = x - k·P1 - k·P2 - k·P3  each product exact, accumulated in double-double
//! while r >  π/4: k += 1, r -= π/2
//! while r < -π/4: k -= 1, r += π/2
//! ```
//!
//! `k·P1` and `k·P2` are exact products, so cancellation only loses the
//! bits that `P1 + P2 + P3` does not carry: about 160 bits of π/2 minus
//! `log2 |k|`. That path is used below [`LARGE_ARGUMENT`].
//!
//! # Algorithm (π/2, large arguments)
//!
//! ```text
//! |x| = m·2^e                      m a 53-bit integer
//! V   = 192 bits of 2/π from bit max(1, e - 1) on
//! P   = m·V                        exact 256-bit product
//! q   = bits s, s+1 of P           s = position of the binary point
//! f   = next 128 bits below s      fraction in [0, 1), folded to [-1/2, 1/2)
//! r   = f·(π/2)                    double-double
//! ```
//!
//! Bits of 2/π above the window only add multiples of 4 to `x·2/π` and are
//! skipped, so the cost does not depend on the size of `x`.

use crate::constants::{
    INV_LN2, INV_PI_2_HI, INV_PI_2_LO, LN2, LN2_HI, LN2_LO, PI2_HI, PI2_LO, PI2_MID, TAU,
    TWO_PI_1, TWO_PI_2, TWO_PI_3,
};
use crate::float::bits::{EXP_MASK, MANTISSA_MASK, ldexp, sign_bit};
use crate::float::double_double::{DoubleDouble, two_product, two_sum};
use crate::float::rounding::{mod4, round_half_even, round_half_even_dd};

/// Maximum post-correction steps applied on each side of `[-π/4, π/4]`
const MAX_QUADRANT_CORRECTIONS: usize = 2;

/// Magnitude from which [`reduce_pio2`] switches to the bit-table reduction, 2^28
pub const LARGE_ARGUMENT: f64 = 268435456.0;

/// Bits of 2/π, most significant first (`0.A2F9836E... × 2^0`)
const TWO_OVER_PI: [u64; 21] = [
    0xA2F9_836E_4E44_1529, 0xFC27_57D1_F534_DDC0, 0xDB62_9599_3C43_9041,
    0xFE51_63AB_DEBB_C561, 0xB724_6E3A_424D_D2E0, 0x0649_2EEA_09D1_921C,
    0xFE1D_EB1C_B129_A73E, 0xE882_35F5_2EBB_4484, 0xE99C_7026_B45F_7E41,
    0x3991_D639_8353_39F4, 0x9C84_5F8B_BDF9_283B, 0x1FF8_97FF_DE05_980F,
    0xEF2F_118B_5A0A_6D1F, 0x6D36_7ECF_27CB_09B7, 0x4F46_3F66_9E5F_EA2D,
    0x7527_BAC7_EBE5_F17B, 0x3D07_39F7_8A52_92EA, 0x6BFB_5FB1_1F8D_5D08,
    0x5603_3046_FC7B_6BAB, 0xF0CF_BC20_9AF4_361D, 0xA9E3_9161_5EE6_1B08,
];

/// Result of reducing modulo π/2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigReduction {
    /// Multiple of π/2 that was removed (integral)
    ///
    /// Exact below [`LARGE_ARGUMENT`]; above it only `k mod 4` is tracked
    /// and `k` equals `quadrant`.
    pub k: f64,
    /// `k mod 4`
    pub quadrant: u8,
    /// Remainder in `[-π/4, π/4]`
    pub r: DoubleDouble,
}

/// Result of reducing modulo ln 2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpReduction {
    /// Power-of-two multiplier
    pub k: i32,
    /// Remainder in `[-ln2/2, ln2/2]`
    pub r: f64,
}

/// π/4 as a double-double
#[inline]
fn pi_4() -> DoubleDouble {
    DoubleDouble::from_three(0.5 * PI2_HI, 0.5 * PI2_MID, 0.5 * PI2_LO)
}

/// `r + sign·π/2` with every part of π/2 folded in.
#[inline]
fn add_pio2(r: DoubleDouble, sign: f64) -> DoubleDouble {
    let (s0, e0) = two_sum(r.hi, sign * PI2_HI);
    let (s1, e1) = two_sum(r.lo, sign * PI2_MID);
    let (s2, e2) = two_sum(s0, s1);
    let tail = e0 + e1 + e2 + sign * PI2_LO;
    DoubleDouble::from_sum(s2, tail)
}

/// `x - k·(π/2)` using the three-part split.
#[inline]
fn subtract_multiple(x: f64, k: f64) -> DoubleDouble {
    let p1 = DoubleDouble::from_product(k, PI2_HI);
    let p2 = DoubleDouble::from_product(k, PI2_MID);
    let p3 = k * PI2_LO;
    DoubleDouble::from_f64(x) - p1 - p2 + (-p3)
}

/// Reduce a finite `x` modulo π/2.
///
/// Zero, subnormal and any `|x| <= π/4` come back with `k = 0` and `r = x`.
/// Callers must filter NaN and infinities first.
pub fn reduce_pio2(x: f64) -> TrigReduction {
    if x.abs() >= LARGE_ARGUMENT {
        return reduce_pio2_large(x);
    }

    let (mut k, mut r) = if x.abs() > 0.5 * PI2_HI {
        let (p, pe) = two_product(x, INV_PI_2_HI);
        let (q, qe) = two_product(x, INV_PI_2_LO);
        let (yh, yl) = two_sum(p, q);
        let (yh, yl) = two_sum(yh, yl + pe + qe);
        let k = round_half_even_dd(yh, yl);
        (k, subtract_multiple(x, k))
    } else {
        (0.0, DoubleDouble::from_f64(x))
    };

    let upper = pi_4();
    let lower = -upper;
    for _ in 0..MAX_QUADRANT_CORRECTIONS {
        if r > upper {
            k += 1.0;
            r = add_pio2(r, -1.0);
        } else if r < lower {
            k -= 1.0;
            r = add_pio2(r, 1.0);
        } else {
            break;
        }
    }

    TrigReduction {
        k,
        quadrant: mod4(k),
        r,
    }
}

/// 64 bits of 2/π starting at bit `p` after the binary point (0-based).
#[inline]
fn two_over_pi_bits(p: usize) -> u64 {
    let (word, offset) = (p / 64, p % 64);
    if offset == 0 {
        TWO_OVER_PI[word]
    } else {
        (TWO_OVER_PI[word] << offset) | (TWO_OVER_PI[word + 1] >> (64 - offset))
    }
}

/// Reduce a finite `x` modulo π/2 with a window of 2/π bits.
///
/// Valid for any `|x| >= 1`; [`reduce_pio2`] only routes `|x| >= 2^28` here.
fn reduce_pio2_large(x: f64) -> TrigReduction {
    debug_assert!(x.is_finite() && x.abs() >= 1.0);

    let bits = x.to_bits();
    let m = u128::from((bits & MANTISSA_MASK) | (1 << 52));
    let e = ((bits & EXP_MASK) >> 52) as i32 - 1075;

    // Earlier bits of 2/π contribute multiples of 4 to m·2^e·(2/π)
    let first = (e - 1).max(1);
    let start = (first - 1) as usize;
    let v0 = u128::from(two_over_pi_bits(start));
    let v1 = u128::from(two_over_pi_bits(start + 64));
    let v2 = u128::from(two_over_pi_bits(start + 128));

    // m < 2^53, so none of the partial sums leave u128
    const LOW: u128 = u64::MAX as u128;
    let t2 = m * v2;
    let t1 = m * v1 + (t2 >> 64);
    let hi = m * v0 + (t1 >> 64);
    let lo = ((t1 & LOW) << 64) | (t2 & LOW);

    // Binary point of the product sits at bit `point`; 190 <= point <= 244
    let point = (first + 191 - e) as u32;
    let shift = point - 128;
    let mut quadrant = ((hi >> shift) & 3) as u8;
    let mut frac = (lo >> shift) | (hi << (128 - shift));

    let round_up = frac >> 127 != 0;
    if round_up {
        quadrant = (quadrant + 1) & 3;
        frac = frac.wrapping_neg();
    }

    let mut r = if frac == 0 {
        DoubleDouble::default()
    } else {
        let lz = frac.leading_zeros() as i32;
        let norm = frac << lz;
        let f_hi = ldexp((norm >> 75) as f64, 75 - 128 - lz);
        let f_lo = ldexp(((norm >> 22) & ((1 << 53) - 1)) as f64, 22 - 128 - lz);
        let (p, pe) = two_product(f_hi, PI2_HI);
        DoubleDouble::from_sum(p, pe + (f_hi * PI2_MID + f_lo * PI2_HI))
    };
    if round_up {
        r = -r;
    }
    if sign_bit(x) {
        quadrant = (4 - quadrant) & 3;
        r = -r;
    }

    TrigReduction {
        k: f64::from(quadrant),
        quadrant,
        r,
    }
}

/// Reduce a finite `x` modulo 2π into `[-π, π]`.
///
/// Single-double result; the three 2π parts keep `k·TWO_PI_1` and
/// `k·TWO_PI_2` exact for `|k| < 2^20`, so callers keep `|x|` below
/// [`TWO_PI_LIMIT`].
pub fn reduce_two_pi(x: f64) -> f64 {
    let k = round_half_even(x * (1.0 / TAU));
    if k == 0.0 {
        return x;
    }
    ((x - k * TWO_PI_1) - k * TWO_PI_2) - k * TWO_PI_3
}

/// Largest `|x|` handed to [`reduce_two_pi`], 2^20
pub const TWO_PI_LIMIT: f64 = 1048576.0;

/// Reduce a finite `x` modulo ln 2.
///
/// `k` is nudged by one if rounding pushed `r` outside `[-ln2/2, ln2/2]`.
/// Valid for `|x| <= MAX_LOG`-scale inputs, where `k` fits comfortably in `i32`.
pub fn reduce_ln2(x: f64) -> ExpReduction {
    let mut k = round_half_even(x * INV_LN2);
    let sub = |k: f64| (x - k * LN2_HI) - k * LN2_LO;
    let mut r = sub(k);

    let half = 0.5 * LN2;
    if r > half {
        k += 1.0;
        r = sub(k);
    } else if r < -half {
        k -= 1.0;
        r = sub(k);
    }

    ExpReduction { k: k as i32, r }
}
