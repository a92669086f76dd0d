//! Newton-Raphson root finding for scalar functions
//!
//! # Algorithm
//!
//! ```text
//! for i in 0..max_iter:
//!     fx  = f(x)
//!     dfx = f'(x)                      or (f(x + h) - fx) / h, h = fd_eps·max(1, |x|)
//!     if dfx == 0: fail(i, fx, tol)
//!     dx    = -fx / dfx
//!     x_new = x + dx
//!     if |dx| <= tol·max(1, |x_new|): return x_new
//!     x = x_new
//! fail(max_iter, |f(x)|, tol)
//! ```
//!
//! Failures always surface as [`Error::Convergence`]; no best-effort guess
//! is returned.

use crate::error::{Error, Result};

// ============================================================================
// Options and Result
// ============================================================================

/// Configuration for [`newton`] and [`newton_fd`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions {
    /// Relative step tolerance (default: 1e-15)
    ///
    /// Converged when `|dx| <= tol * max(1, |x_new|)`.
    pub tol: f64,

    /// Maximum number of iterations (default: 100)
    pub max_iter: usize,

    /// Relative finite-difference step for [`newton_fd`] (default: 1e-8)
    pub fd_eps: f64,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            tol: 1e-15,
            max_iter: 100,
            fd_eps: 1e-8,
        }
    }
}

impl NewtonOptions {
    /// Set the relative step tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the iteration budget
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the finite-difference step
    pub fn with_fd_eps(mut self, fd_eps: f64) -> Self {
        self.fd_eps = fd_eps;
        self
    }
}

/// Converged Newton iterate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// The root estimate `x_new` from the final step
    pub root: f64,

    /// Number of iterations performed (at least 1)
    pub iterations: usize,

    /// `|f(x)|` evaluated at the start of the final step
    pub residual: f64,
}

// ============================================================================
// Solvers
// ============================================================================

/// Find a root of `f` starting from `x0`, using the explicit derivative `fprime`.
///
/// # Errors
///
/// [`Error::Convergence`] if `fprime` evaluates to exactly zero, or if
/// `opts.max_iter` steps pass without meeting the tolerance.
pub fn newton<F, D>(f: F, fprime: D, x0: f64, opts: &NewtonOptions) -> Result<NewtonResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    iterate(&f, |x, _fx| fprime(x), x0, opts)
}

/// Find a root of `f` starting from `x0`, with a forward-difference derivative.
///
/// The step is `opts.fd_eps * max(1, |x|)` so it scales with the iterate.
///
/// # Errors
///
/// Same as [`newton`]. A flat difference quotient counts as a zero derivative.
pub fn newton_fd<F>(f: F, x0: f64, opts: &NewtonOptions) -> Result<NewtonResult>
where
    F: Fn(f64) -> f64,
{
    let fd_eps = opts.fd_eps;
    iterate(
        &f,
        |x, fx| {
            let h = fd_eps * x.abs().max(1.0);
            (f(x + h) - fx) / h
        },
        x0,
        opts,
    )
}

/// Shared Newton loop; `deriv` receives `(x, f(x))`.
fn iterate<F, D>(f: &F, deriv: D, x0: f64, opts: &NewtonOptions) -> Result<NewtonResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    let tol = opts.tol;
    let mut x = x0;

    for i in 0..opts.max_iter {
        let fx = f(x);
        let dfx = deriv(x, fx);
        if dfx == 0.0 {
            tracing::debug!(iteration = i, x, fx, "newton: zero derivative");
            return Err(Error::convergence(i, fx, tol));
        }

        let dx = -fx / dfx;
        let x_new = x + dx;
        tracing::trace!(iteration = i, x, dx, "newton step");

        if dx.abs() <= tol * x_new.abs().max(1.0) {
            return Ok(NewtonResult {
                root: x_new,
                iterations: i + 1,
                residual: fx.abs(),
            });
        }
        x = x_new;
    }

    let residual = f(x).abs();
    tracing::debug!(
        max_iter = opts.max_iter,
        x,
        residual,
        tol,
        "newton: iteration budget exhausted"
    );
    Err(Error::convergence(opts.max_iter, residual, tol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = NewtonOptions::default();
        assert_eq!(opts.tol, 1e-15);
        assert_eq!(opts.max_iter, 100);
        assert_eq!(opts.fd_eps, 1e-8);

        let opts = opts.with_tol(1e-10).with_max_iter(7).with_fd_eps(1e-6);
        assert_eq!((opts.tol, opts.max_iter, opts.fd_eps), (1e-10, 7, 1e-6));
    }

    #[test]
    fn test_linear_converges_in_two_steps() {
        let r = newton(|x| x - 3.0, |_| 1.0, 10.0, &NewtonOptions::default()).unwrap();
        assert_eq!(r.root, 3.0);
        assert_eq!(r.iterations, 2);
    }

    #[test]
    fn test_sqrt2_root() {
        let r = newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &NewtonOptions::default()).unwrap();
        assert!((r.root - std::f64::consts::SQRT_2).abs() < 1e-15);
        assert!(r.iterations < 10);
    }

    #[test]
    fn test_fd_derivative() {
        let opts = NewtonOptions::default().with_tol(1e-12);
        let r = newton_fd(|x| x * x * x - 8.0, 3.0, &opts).unwrap();
        assert!((r.root - 2.0).abs() < 1e-10, "root = {}", r.root);
    }

    #[test]
    fn test_zero_derivative_reports_state() {
        let err = newton(|x| x * x + 1.0, |x| 2.0 * x, 0.0, &NewtonOptions::default())
            .unwrap_err();
        assert_eq!(err, Error::convergence(0, 1.0, 1e-15));
    }

    #[test]
    fn test_budget_exhaustion() {
        // No real root: Newton wanders forever
        let opts = NewtonOptions::default().with_max_iter(5);
        let err = newton(|x| x * x + 1.0, |x| 2.0 * x, 0.5, &opts).unwrap_err();
        match err {
            Error::Convergence {
                iterations,
                residual,
                tolerance,
            } => {
                assert_eq!(iterations, 5);
                assert!(residual >= 1.0);
                assert_eq!(tolerance, 1e-15);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
