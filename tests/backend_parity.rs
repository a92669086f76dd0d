//! Backend parity tests
//!
//! Every candidate backend must agree with the host backend to
//! `|a - b| <= 1e-14 + 1e-12 * |b|` over the sample grids.

mod common;

use common::{
    assert_parity_f64, candidate_backends, eval_trig, huge_grid, large_grid, small_grid,
};
use transcendr::runtime::{BackendKind, NumericsConfig};

/// Drop samples too close to a tangent pole for a relative comparison
fn away_from_poles(xs: &[f64]) -> Vec<f64> {
    xs.iter().copied().filter(|x| x.cos().abs() > 1e-2).collect()
}

fn check_grid(xs: &[f64], label: &str) {
    let reference = BackendKind::System.backend();
    let tan_xs = away_from_poles(xs);

    for kind in candidate_backends() {
        let backend = kind.backend();
        for op in ["sin", "cos"] {
            assert_parity_f64(
                &eval_trig(backend, op, xs),
                &eval_trig(reference, op, xs),
                &format!("{}/{}/{}", kind, op, label),
            );
        }
        assert_parity_f64(
            &eval_trig(backend, "tan", &tan_xs),
            &eval_trig(reference, "tan", &tan_xs),
            &format!("{}/tan/{}", kind, label),
        );
    }
}

#[test]
fn test_parity_small_grid() {
    check_grid(&small_grid(), "small");
}

#[test]
fn test_parity_large_grid() {
    check_grid(&large_grid(), "large");
}

#[test]
fn test_parity_huge_grid() {
    check_grid(&huge_grid(), "huge");
}

#[test]
fn test_parity_sincos_matches_components() {
    let xs = small_grid();
    for kind in BackendKind::ALL {
        let cfg = NumericsConfig::new(kind);
        for &x in &xs {
            let (s, c) = cfg.sincos(x);
            assert_eq!(s.to_bits(), cfg.sin(x).to_bits(), "{} sincos/sin at {}", kind, x);
            assert_eq!(c.to_bits(), cfg.cos(x).to_bits(), "{} sincos/cos at {}", kind, x);
        }
    }
}

#[test]
fn test_parity_non_finite_is_nan() {
    for kind in BackendKind::ALL {
        let backend = kind.backend();
        for x in common::non_finite() {
            assert!(backend.sin(x).is_nan(), "{} sin({})", kind, x);
            assert!(backend.cos(x).is_nan(), "{} cos({})", kind, x);
            assert!(backend.tan(x).is_nan(), "{} tan({})", kind, x);
        }
    }
}

#[test]
fn test_parity_zero() {
    for kind in BackendKind::ALL {
        let backend = kind.backend();
        assert_eq!(backend.sin(0.0), 0.0);
        assert_eq!(backend.cos(0.0), 1.0);
        assert_eq!(backend.tan(0.0), 0.0);
        assert_eq!(backend.name(), kind.as_str());
    }
}
