//! Integration tests for the Newton-Raphson solvers and numeric derivative

use transcendr::algorithm::derivative_central;
use transcendr::error::Error;
use transcendr::prelude::*;

#[test]
fn test_newton_linear_converges_quickly() {
    let opts = NewtonOptions::default();
    for c in [-7.5, 0.0, 3.0, 1e6] {
        let res = newton(|x| x - c, |_| 1.0, 0.0, &opts).unwrap();
        assert!((res.root - c).abs() <= 1e-12 * c.abs().max(1.0));
        assert!(res.iterations <= 3, "{} iterations for c={}", res.iterations, c);
    }
}

#[test]
fn test_newton_fd_linear() {
    let res = newton_fd(|x| x - 3.0, 10.0, &NewtonOptions::default()).unwrap();
    assert!((res.root - 3.0).abs() < 1e-12);
    assert!(res.iterations <= 5);
}

#[test]
fn test_newton_transcendental_roots() {
    let opts = NewtonOptions::default();

    // Dottie number: cos x = x
    let res = newton(|x| cos(x) - x, |x| -sin(x) - 1.0, 1.0, &opts).unwrap();
    assert!((res.root - 0.7390851332151607).abs() < 1e-15);

    let res = newton_fd(|x| exp(x) - 10.0, 2.0, &opts).unwrap();
    assert!((res.root - std::f64::consts::LN_10).abs() < 1e-12);
}

#[test]
fn test_newton_zero_derivative_fails() {
    let opts = NewtonOptions::default();
    let err = newton(|x| (x - 1.0) * (x - 1.0) + 1.0, |x| 2.0 * (x - 1.0), 1.0, &opts)
        .unwrap_err();
    assert_eq!(err, Error::convergence(0, 1.0, opts.tol));
    assert!(err.is_convergence());
}

#[test]
fn test_newton_budget_exhausted() {
    let opts = NewtonOptions::default().with_max_iter(1);
    let err = newton(|x| x - 1.0, |_| 1e-300, 0.5, &opts).unwrap_err();
    match err {
        Error::Convergence {
            iterations,
            tolerance,
            ..
        } => {
            assert_eq!(iterations, 1);
            assert_eq!(tolerance, opts.tol);
        }
        other => panic!("expected a convergence error, got {:?}", other),
    }
}

#[test]
fn test_newton_no_real_root() {
    let opts = NewtonOptions::default().with_max_iter(50);
    let err = newton(|x| x * x + 1.0, |x| 2.0 * x, 0.5, &opts).unwrap_err();
    assert!(err.is_convergence());
}

#[test]
fn test_derivative_central() {
    let d = derivative_central(f64::sin, 0.3, None, 6);
    assert!((d - 0.3f64.cos()).abs() < 1e-10);

    let d = derivative_central(exp, 1.0, Some(1e-2), 6);
    assert!((d - std::f64::consts::E).abs() < 1e-10);

    let d = derivative_central(|x| x * x * x, 2.0, None, 1);
    assert!((d - 12.0).abs() < 1e-5);
}
