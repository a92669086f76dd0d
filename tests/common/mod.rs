//! Common test utilities
#![allow(dead_code)]

use transcendr::runtime::{BackendKind, TrigBackend};

/// Relative tolerance for backend parity checks
pub const PARITY_RTOL: f64 = 1e-12;

/// Absolute tolerance for backend parity checks
pub const PARITY_ATOL: f64 = 1e-14;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert a backend result matches the reference backend
///
/// NaN on both sides counts as a match.
pub fn assert_parity_f64(a: &[f64], b: &[f64], op: &str) {
    assert_eq!(a.len(), b.len(), "parity_f64[{}]: length mismatch", op);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        if x.is_nan() && y.is_nan() {
            continue;
        }
        let diff = (x - y).abs();
        let tol = PARITY_ATOL + PARITY_RTOL * y.abs();
        assert!(
            diff <= tol,
            "parity_f64[{}] at index {}: {} vs {} (diff={}, tol={})",
            op,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Evaluate `f` over every sample
pub fn map(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
    xs.iter().map(|&x| f(x)).collect()
}

/// `n + 1` evenly spaced points covering `[lo, hi]`
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / n as f64;
    (0..=n).map(|i| lo + step * i as f64).collect()
}

/// Dense grid over `[-10, 10]`, with multiples of π/4 mixed in
pub fn small_grid() -> Vec<f64> {
    let mut xs = linspace(-10.0, 10.0, 2000);
    xs.extend((-12..=12).map(|k| k as f64 * std::f64::consts::FRAC_PI_4));
    xs
}

/// Sparse grid reaching ±1e6
pub fn large_grid() -> Vec<f64> {
    let mut xs = linspace(-1e6, 1e6, 4001);
    xs.extend([1e3, -1e3, 12345.678, 99999.5, 654321.123, -987654.321, 1e6 - 0.25]);
    xs
}

/// Geometric grid from 1e6 to `f64::MAX`, both signs
pub fn huge_grid() -> Vec<f64> {
    let mut xs = Vec::new();
    let mut x: f64 = 1e6;
    while x.is_finite() {
        xs.extend([x, -x, x + 0.5 * x * f64::EPSILON.sqrt()]);
        x *= 2.9;
    }
    xs.extend([2f64.powi(28), -2f64.powi(28), 1e22, 1e300, f64::MAX, -f64::MAX]);
    xs
}

/// Non-finite inputs every backend maps to NaN
pub fn non_finite() -> [f64; 3] {
    [f64::NAN, f64::INFINITY, f64::NEG_INFINITY]
}

/// The backends compared against the host reference
pub fn candidate_backends() -> [BackendKind; 2] {
    [BackendKind::Pure, BackendKind::Chebyshev]
}

/// Evaluate one trig operation of `backend` over `xs`
pub fn eval_trig(backend: &dyn TrigBackend, op: &str, xs: &[f64]) -> Vec<f64> {
    match op {
        "sin" => map(xs, |x| backend.sin(x)),
        "cos" => map(xs, |x| backend.cos(x)),
        "tan" => map(xs, |x| backend.tan(x)),
        _ => panic!("unknown trig op {}", op),
    }
}
