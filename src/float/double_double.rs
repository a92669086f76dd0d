//! Error-free transformations and double-double arithmetic
//!
//! A [`DoubleDouble`] is an unevaluated sum `hi + lo` with `|lo| <= ulp(hi)/2`,
//! giving roughly 106 bits of significand.
//!
//! # Algorithm
//!
//! ```text
//! two_sum(a, b):       s = a + b; v = s - a; e = (a - (s - v)) + (b - v)
//! split(a):            t = (2^27 + 1) * a; hi = t - (t - a); lo = a - hi
//! two_product(a, b):   p = a * b; e = ((ah*bh - p) + ah*bl + al*bh) + al*bl
//! ```
//!
//! Both transforms are exact (`s + e == a + b`, `p + e == a * b`) as long as
//! no intermediate overflows. No FMA is used, so results are identical on
//! every IEEE-754 target.

use std::ops::{Add, Mul, Neg, Sub};

/// Dekker's splitting constant, 2^27 + 1
const SPLITTER: f64 = 134217729.0;

// ============================================================================
// Error-free transformations
// ============================================================================

/// Knuth's TwoSum: `s + e == a + b` exactly, with `s = fl(a + b)`.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let v = s - a;
    let e = (a - (s - v)) + (b - v);
    (s, e)
}

/// Dekker split of `a` into two non-overlapping 26-bit halves.
#[inline]
pub fn split(a: f64) -> (f64, f64) {
    let t = SPLITTER * a;
    let hi = t - (t - a);
    let lo = a - hi;
    (hi, lo)
}

/// Dekker's TwoProduct: `p + e == a * b` exactly, with `p = fl(a * b)`.
#[inline]
pub fn two_product(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let e = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
    (p, e)
}

/// Quotient `n / d` corrected twice with exact residuals.
///
/// Each step computes `r = n - q*d` exactly through [`two_product`] and
/// adds `r / d`. A non-finite first quotient (division by zero, overflow,
/// NaN operands) is returned as-is so IEEE semantics are preserved.
#[inline]
pub fn compensated_div(n: f64, d: f64) -> f64 {
    let q0 = n / d;
    if !q0.is_finite() {
        return q0;
    }
    let (p, pe) = two_product(q0, d);
    let r = (n - p) - pe;
    let q1 = q0 + r / d;

    let (p, pe) = two_product(q1, d);
    let r = (n - p) - pe;
    q1 + r / d
}

// ============================================================================
// DoubleDouble
// ============================================================================

/// Unevaluated sum `hi + lo`
///
/// The derived ordering is lexicographic on `(hi, lo)`, which matches the
/// order of the represented values when both operands are normalised.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DoubleDouble {
    /// Leading part, `fl(hi + lo)`
    pub hi: f64,
    /// Trailing error term
    pub lo: f64,
}

impl DoubleDouble {
    /// Construct without renormalising.
    #[inline]
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// Promote a single double.
    #[inline]
    pub const fn from_f64(x: f64) -> Self {
        Self { hi: x, lo: 0.0 }
    }

    /// Exact sum of two doubles.
    #[inline]
    pub fn from_sum(a: f64, b: f64) -> Self {
        let (hi, lo) = two_sum(a, b);
        Self { hi, lo }
    }

    /// Exact product of two doubles.
    #[inline]
    pub fn from_product(a: f64, b: f64) -> Self {
        let (hi, lo) = two_product(a, b);
        Self { hi, lo }
    }

    /// Collapse a three-term expansion into a normalised pair.
    #[inline]
    pub fn from_three(a: f64, b: f64, c: f64) -> Self {
        let (s, e) = two_sum(b, c);
        let (hi, lo) = two_sum(a, s);
        Self::from_sum(hi, lo + e)
    }

    /// Rounded value `fl(hi + lo)`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let (s0, e0) = two_sum(self.hi, other.hi);
        let (s1, e1) = two_sum(self.lo, other.lo);
        let (s2, e2) = two_sum(s0, s1);
        Self::from_sum(s2, (e0 + e1) + e2)
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Add<f64> for DoubleDouble {
    type Output = Self;

    #[inline]
    fn add(self, b: f64) -> Self {
        let (s, e) = two_sum(self.hi, b);
        Self::from_sum(s, e + self.lo)
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = Self;

    #[inline]
    fn mul(self, b: f64) -> Self {
        let (p, e) = two_product(self.hi, b);
        Self::from_sum(p, e + self.lo * b)
    }
}
