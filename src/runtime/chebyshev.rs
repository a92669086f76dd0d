//! Backend built on full-period Chebyshev expansions

use crate::algorithm::elementary::chebyshev as kernels;

impl_trig_backend!(Chebyshev, "chebyshev", kernels);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::TrigBackend;

    #[test]
    fn test_chebyshev_backend() {
        let b = ChebyshevBackend;
        assert_eq!(b.name(), "chebyshev");
        assert_eq!(b.cos(4.0), kernels::cos(4.0));
        assert!(b.sin(f64::NEG_INFINITY).is_nan());
        assert!((b.tan(0.5) - 0.5f64.tan()).abs() < 1e-15);
    }
}
