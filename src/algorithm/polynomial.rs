//! Polynomial and Chebyshev-series evaluation
//!
//! Coefficient tables are ordered by ascending index: `coeffs[0]` is the
//! constant term (Horner) or the `T_0` weight (Clenshaw).
//!
//! # Algorithm
//!
//! Clenshaw's backward recurrence for `S(y) = Σ c_k T_k(y)`:
//!
//! ```text
//! b_{n+1} = b_{n+2} = 0
//! b_k = c_k + 2y·b_{k+1} - b_{k+2}      for k = n..1
//! S   = c_0 + y·b_1 - b_2
//! ```
//!
//! Odd and even series substitute `z = T_2(y) = 2y² - 1` so only the
//! non-zero coefficients are visited:
//!
//! ```text
//! Σ c_k T_{2k}(y)   = Σ c_k T_k(z)                   (plain Clenshaw in z)
//! Σ c_k T_{2k+1}(y) = y · (b_0 - b_1)                (same recurrence in z)
//! ```
//!
//! The odd form follows from `T_{2k+3} = 2z·T_{2k+1} - T_{2k-1}` with
//! `T_1 = y` and `T_3 = y(2z - 1)`.

/// Evaluate `Σ coeffs[i] · x^i` by Horner's rule.
///
/// An empty table evaluates to `0.0`.
#[inline]
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluate the truncated Chebyshev series `Σ coeffs[k] · T_k(y)`.
///
/// `coeffs[0]` carries full weight (no halving).
pub fn clenshaw(coeffs: &[f64], y: f64) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    let two_y = 2.0 * y;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for &c in rest.iter().rev() {
        let b0 = c + two_y * b1 - b2;
        b2 = b1;
        b1 = b0;
    }
    c0 + y * b1 - b2
}

/// Evaluate the even series `Σ coeffs[k] · T_{2k}(y)`.
#[inline]
pub fn clenshaw_even(coeffs: &[f64], y: f64) -> f64 {
    clenshaw(coeffs, 2.0 * y * y - 1.0)
}

/// Evaluate the odd series `Σ coeffs[k] · T_{2k+1}(y)`.
pub fn clenshaw_odd(coeffs: &[f64], y: f64) -> f64 {
    let z = 2.0 * y * y - 1.0;
    let two_z = 2.0 * z;
    // (b_k, b_{k+1}) walking down to k = 0
    let mut b0 = 0.0;
    let mut b1 = 0.0;
    for &c in coeffs.iter().rev() {
        let next = c + two_z * b0 - b1;
        b1 = b0;
        b0 = next;
    }
    y * (b0 - b1)
}
