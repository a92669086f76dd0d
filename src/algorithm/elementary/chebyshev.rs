//! Full-period Chebyshev expansions of sine and cosine
//!
//! # Algorithm
//!
//! ```text
//! r = reduce_two_pi(x)            r ∈ [-π, π]
//! y = r / π                       y ∈ [-1, 1]
//! sin(πy) = Σ 2(-1)^k J_{2k+1}(π) · T_{2k+1}(y)      13 terms
//! cos(πy) = J_0(π) + Σ 2(-1)^k J_{2k}(π) · T_{2k}(y)  21 terms
//! ```
//!
//! Beyond `|x| = 2^20` the 2π split stops being exact, so those arguments
//! take the π/2 reduction instead and the series run on `y ∈ [-1/4, 1/4]`,
//! with the quadrant table folding the result back.
//!
//! The series converge super-geometrically, so the truncated tails sit far
//! below 1e-16. The pair `(s, c)` is pushed back onto the unit circle when
//! `|s² + c² - 1|` exceeds 4e-16.

use super::reduction::{TWO_PI_LIMIT, reduce_pio2, reduce_two_pi};
use super::sqrt::sqrt;
use super::trig::reconstruct;
use crate::algorithm::polynomial::{clenshaw_even, clenshaw_odd};
use crate::constants::INV_PI;

/// Unit-circle drift that triggers renormalisation
const RENORM_THRESHOLD: f64 = 4e-16;

/// `2(-1)^k J_{2k+1}(π)` for `k = 0..13`
const SIN_CHEB: [f64; 13] = [
    5.69230686359505514690621199372e-1,
    -6.66916672405979070780437163480e-1,
    1.04282368734236949480920252186e-1,
    -6.84063353699157900985137450329e-3,
    2.50006884950386227652215859008e-4,
    -5.85024830863914369171711619397e-6,
    9.53477275029940114004406775030e-8,
    -1.14563844170946315134756461815e-9,
    1.05742726175391285886989821647e-11,
    -7.73527099540430709415664628627e-14,
    4.59595614618295945919569164343e-16,
    -2.26230592819741110431266043618e-18,
    9.37764779915313579625162444174e-21,
];

/// `J_0(π)` followed by `2(-1)^k J_{2k}(π)` for `k = 1..21`
const COS_CHEB: [f64; 21] = [
    -3.04242177644093864202034912818e-1,
    -9.70867865263018219410991432366e-1,
    3.02849155262699421507419118631e-1,
    -2.90919339650111211473207392080e-2,
    1.39224399117623185998462220895e-3,
    -4.01899445107549429881652623637e-5,
    7.78276701181530608857305789695e-7,
    -1.08265303418582848109342149268e-8,
    1.13510917791150770103019401952e-10,
    -9.29529663267875655288541008453e-13,
    6.11136418833476772380622907668e-15,
    -3.29765784134345898638243555411e-17,
    1.48681342367320770479543710935e-19,
    -5.68557813684716435376105402637e-22,
    1.86742062104768142592220173020e-24,
    -5.32544678353978417005705767787e-27,
    1.33102565167121694216809032100e-29,
    -2.93964321349350579748495535843e-32,
    5.77860971039493827501269009893e-35,
    -1.01757564166906268062520133550e-37,
    1.61445217148946221306633275540e-40,
];

/// Compute `(sin x, cos x)` from the Chebyshev expansions.
pub fn sincos(x: f64) -> (f64, f64) {
    if x == 0.0 {
        return (x, 1.0);
    }
    if !x.is_finite() {
        return (f64::NAN, f64::NAN);
    }

    let (s, c) = if x.abs() > TWO_PI_LIMIT {
        let red = reduce_pio2(x);
        let y = red.r.to_f64() * INV_PI;
        let (s, c) = (clenshaw_odd(&SIN_CHEB, y), clenshaw_even(&COS_CHEB, y));
        reconstruct(red.quadrant, s, c)
    } else {
        let y = reduce_two_pi(x) * INV_PI;
        (clenshaw_odd(&SIN_CHEB, y), clenshaw_even(&COS_CHEB, y))
    };

    let norm = s * s + c * c;
    if (norm - 1.0).abs() > RENORM_THRESHOLD {
        let h = sqrt(norm);
        return (s / h, c / h);
    }
    (s, c)
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

/// Tangent as the guarded quotient `sin / cos`; NaN when `cos == 0.0`.
pub fn tan(x: f64) -> f64 {
    let (s, c) = sincos(x);
    if c == 0.0 {
        return f64::NAN;
    }
    s / c
}
