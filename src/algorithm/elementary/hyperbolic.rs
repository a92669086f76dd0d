//! Hyperbolic functions and their inverses
//!
//! Built from [`exp`], [`ln`](super::log::ln) and [`sqrt`] with a branch per
//! magnitude band so that no intermediate overflows or cancels. With
//! `a = abs(x)`:
//!
//! | function | small `a`        | near zero                           | moderate                    | large `a`                        |
//! |----------|------------------|-------------------------------------|-----------------------------|----------------------------------|
//! | sinh     | `x` (< 1e-8)     | `±0.5(m + m/(1 + m))`, `m = expm1(a)` (≤ ln2/2) | `±0.5(e^a - e^-a)` | `±(0.5·e^(a/2))·e^(a/2)` (> 22)  |
//! | cosh     | `1 + x²/2`       | -                                   | `0.5(e^a + e^-a)`           | `(0.5·e^(a/2))·e^(a/2)` (> 22)   |
//! | tanh     | `x`              | `±m/(m + 2)`, `m = expm1(2a)` (≤ ln2/4) | `±(e^2a - 1)/(e^2a + 1)` | `±1` (> 20)                  |
//! | asinh    | `x`              | `±ln1p(a + a²/(1 + √(1 + a²)))` (≤ 0.3) | `±ln(a + √(a² + 1))`   | `±(ln a + ln 2)` (> 2^28)        |
//! | acosh    | -                | `ln1p(t + √(t(x + 1)))`, `t = x - 1` (≤ 1.05) | `ln(x + √((x-1)(x+1)))` | `ln x + ln 2` (> 2^28)  |
//! | atanh    | `x`              | `±0.5·ln1p(2a/(1 - a))` (< 0.15)    | `±0.5·ln((1 + a)/(1 - a))`  | -                                |
//!
//! The near-zero column never subtracts two values close to 1, so results
//! there stay accurate relative to their own size.
//!
//! Every function returns NaN for non-finite input. Out-of-domain
//! arguments (`acosh(x < 1)`, `atanh(|x| >= 1)`) also give NaN.

use super::exp::{exp, kernel_expm1};
use super::log::{ln_1p, ln_or_nan};
use super::sqrt::sqrt;
use crate::constants::LN2;
use crate::float::bits::copysign;

/// Below this magnitude the first Taylor term is exact to double precision
const SMALL: f64 = 1e-8;
/// Largest argument of the `expm1` kernel, ln2/2
const EXPM1_LIMIT: f64 = 0.34657359027997264;
/// `asinh` switches to `ln1p` below this
const ASINH_NEAR_ZERO: f64 = 0.3;
/// `acosh` switches to `ln1p` below this
const ACOSH_NEAR_ONE: f64 = 1.05;
/// `atanh` switches to `ln1p` below this
const ATANH_NEAR_ZERO: f64 = 0.15;
/// Above this `e^-|x|` is below an ulp of `e^|x|`
const SINH_COSH_LARGE: f64 = 22.0;
/// Above this `tanh` rounds to ±1
const TANH_SATURATE: f64 = 20.0;
/// Above this `√(x² ± 1)` rounds to `|x|`
const INVERSE_LARGE: f64 = 268435456.0; // 2^28

/// `0.5·e^a` without overflowing before the true result does
#[inline]
fn half_exp(a: f64) -> f64 {
    let h = exp(0.5 * a);
    (0.5 * h) * h
}

/// Hyperbolic sine.
pub fn sinh(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let a = x.abs();
    if a < SMALL {
        return x;
    }
    if a <= EXPM1_LIMIT {
        let m = kernel_expm1(a);
        return copysign(0.5 * (m + m / (1.0 + m)), x);
    }
    if a > SINH_COSH_LARGE {
        return copysign(half_exp(a), x);
    }
    let ea = exp(a);
    copysign(0.5 * (ea - 1.0 / ea), x)
}

/// Hyperbolic cosine; always `>= 1` for finite input.
pub fn cosh(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let a = x.abs();
    if a < SMALL {
        return 1.0 + 0.5 * x * x;
    }
    if a > SINH_COSH_LARGE {
        return half_exp(a);
    }
    let ea = exp(a);
    (0.5 * (ea + 1.0 / ea)).max(1.0)
}

/// Hyperbolic tangent; in `[-1, 1]` for finite input.
pub fn tanh(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let a = x.abs();
    if a < SMALL {
        return x;
    }
    if a <= 0.5 * EXPM1_LIMIT {
        let m = kernel_expm1(2.0 * a);
        return copysign(m / (m + 2.0), x);
    }
    if a > TANH_SATURATE {
        return copysign(1.0, x);
    }
    let e2a = exp(2.0 * a);
    copysign((e2a - 1.0) / (e2a + 1.0), x)
}

/// Inverse hyperbolic sine.
pub fn asinh(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let a = x.abs();
    if a < SMALL {
        return x;
    }
    let y = if a <= ASINH_NEAR_ZERO {
        ln_1p(a + a * a / (1.0 + sqrt(1.0 + a * a)))
    } else if a > INVERSE_LARGE {
        ln_or_nan(a) + LN2
    } else {
        ln_or_nan(a + sqrt(a * a + 1.0))
    };
    copysign(y, x)
}

/// Inverse hyperbolic cosine; NaN for `x < 1`.
pub fn acosh(x: f64) -> f64 {
    if !x.is_finite() || x < 1.0 {
        return f64::NAN;
    }
    if x == 1.0 {
        return 0.0;
    }
    if x <= ACOSH_NEAR_ONE {
        // x - 1 is exact here
        let t = x - 1.0;
        return ln_1p(t + sqrt(t * (x + 1.0)));
    }
    if x > INVERSE_LARGE {
        return ln_or_nan(x) + LN2;
    }
    ln_or_nan(x + sqrt((x - 1.0) * (x + 1.0)))
}

/// Inverse hyperbolic tangent; NaN unless `|x| < 1`.
pub fn atanh(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let a = x.abs();
    if a >= 1.0 {
        return f64::NAN;
    }
    if a < SMALL {
        return x;
    }
    if a < ATANH_NEAR_ZERO {
        return copysign(0.5 * ln_1p(2.0 * a / (1.0 - a)), x);
    }
    copysign(0.5 * ln_or_nan((1.0 + a) / (1.0 - a)), x)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small arguments go through `exp`/`ln` near 1, where error is absolute
    const ATOL: f64 = 1e-15;

    fn assert_rel(a: f64, b: f64, rtol: f64, msg: &str) {
        let diff = (a - b).abs();
        assert!(
            diff <= rtol * b.abs() + ATOL,
            "{}: expected {}, got {}, diff {}",
            msg,
            b,
            a,
            diff
        );
    }

    #[test]
    fn test_non_finite_is_nan() {
        for &x in &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(sinh(x).is_nan());
            assert!(cosh(x).is_nan());
            assert!(tanh(x).is_nan());
            assert!(asinh(x).is_nan());
            assert!(acosh(x).is_nan());
            assert!(atanh(x).is_nan());
        }
    }

    #[test]
    fn test_signed_zero() {
        let nz = (-0.0f64).to_bits();
        assert_eq!(sinh(-0.0).to_bits(), nz);
        assert_eq!(tanh(-0.0).to_bits(), nz);
        assert_eq!(asinh(-0.0).to_bits(), nz);
        assert_eq!(atanh(-0.0).to_bits(), nz);
        assert_eq!(cosh(-0.0), 1.0);
        assert_eq!(acosh(1.0), 0.0);
    }

    #[test]
    fn test_domains() {
        assert!(acosh(0.999).is_nan());
        assert!(atanh(1.0).is_nan());
        assert!(atanh(-1.5).is_nan());
    }

    #[test]
    fn test_matches_host() {
        for &x in &[-15.0, -3.2, -1.0, -0.25, 1e-6, 0.5, 2.0, 7.5, 21.0, 30.0, 300.0] {
            assert_rel(sinh(x), x.sinh(), 4e-15, &format!("sinh({})", x));
            assert_rel(cosh(x), x.cosh(), 4e-15, &format!("cosh({})", x));
            assert_rel(tanh(x), x.tanh(), 4e-15, &format!("tanh({})", x));
            assert_rel(asinh(x), x.asinh(), 4e-15, &format!("asinh({})", x));
        }
        for &x in &[1.0001, 1.5, 10.0, 1e5, 1e10, 1e200] {
            assert_rel(acosh(x), x.acosh(), 4e-15, &format!("acosh({})", x));
        }
        for &x in &[-0.99, -0.5, 1e-5, 0.3, 0.9] {
            assert_rel(atanh(x), x.atanh(), 4e-15, &format!("atanh({})", x));
        }
    }

    #[test]
    fn test_large_branches_saturate_only_when_true_value_overflows() {
        // 0.5·e^710 ≈ 1.117e308 is finite even though e^710 is not
        assert!(sinh(710.0).is_finite());
        assert!(cosh(-710.0).is_finite());
        assert_eq!(sinh(711.0), f64::INFINITY);
        assert_eq!(sinh(-711.0), f64::NEG_INFINITY);
        assert_eq!(tanh(25.0), 1.0);
        assert_eq!(tanh(-25.0), -1.0);
        assert_rel(asinh(1e300), 1e300f64.ln() + std::f64::consts::LN_2, 1e-15, "asinh(1e300)");
    }

    #[test]
    fn test_near_zero_is_relative() {
        let pure_rel = |a: f64, b: f64| (a - b).abs() <= 1e-15 * b.abs();

        // Just above the 1e-8 cutoff, where e^a - e^-a would cancel
        for f in [sinh, tanh, asinh, atanh] {
            assert!(pure_rel(f(2e-8), 2e-8), "{}", f(2e-8));
        }

        let mut x: f64 = 1.01e-8;
        while x < ATANH_NEAR_ZERO {
            for &v in &[x, -x] {
                assert!(pure_rel(sinh(v), v.sinh()), "sinh({}) = {}", v, sinh(v));
                assert!(pure_rel(tanh(v), v.tanh()), "tanh({}) = {}", v, tanh(v));
                assert!(pure_rel(asinh(v), v.asinh()), "asinh({}) = {}", v, asinh(v));
                let expected = v.abs().atanh().copysign(v);
                assert!(pure_rel(atanh(v), expected), "atanh({}) = {}", v, atanh(v));
            }
            x *= 1.9;
        }
    }

    #[test]
    fn test_acosh_near_one_is_relative() {
        // acosh(1 + d) ≈ √(2d) for small d
        let cases = [
            (1.000000000000001, 4.7121609153872417e-8),
            (1.000000000001, 1.4142764231805424e-6),
            (1.000000001, 4.4721361396399915e-5),
            (1.000001, 0.00141421344446382),
            (1.001, 0.04471763360830685),
            (1.04, 0.2819082890541469),
        ];
        for &(x, expected) in &cases {
            let got = acosh(x);
            assert!(
                (got - expected).abs() <= 1e-15 * expected,
                "acosh({}) = {} vs {}",
                x,
                got,
                expected
            );
        }
    }
}
