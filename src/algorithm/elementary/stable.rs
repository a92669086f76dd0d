//! Overflow-safe Euclidean norms

use super::sqrt::sqrt;

/// `√(x² + y²)` without squaring the larger operand.
///
/// Scales by `max(|x|, |y|)`, so the result only overflows when it is
/// genuinely unrepresentable. An infinite operand wins over NaN (IEEE 754
/// `hypot` convention).
pub fn hypot(x: f64, y: f64) -> f64 {
    if x.is_infinite() || y.is_infinite() {
        return f64::INFINITY;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    let (ax, ay) = (x.abs(), y.abs());
    let (big, small) = if ax >= ay { (ax, ay) } else { (ay, ax) };
    if big == 0.0 {
        return 0.0;
    }
    let q = small / big;
    big * sqrt(1.0 + q * q)
}

/// Euclidean norm of a sequence, folding [`hypot`] left to right.
///
/// An empty sequence has norm `0.0`.
pub fn hypot_iter<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, hypot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypot() {
        assert_eq!(hypot(3.0, 4.0), 5.0);
        assert!((hypot(-5.0, 12.0) - 13.0).abs() <= 13.0 * 2.0 * f64::EPSILON);
        assert_eq!(hypot(0.0, -0.0), 0.0);
        assert_eq!(hypot(0.0, 7.0), 7.0);
        assert_eq!(hypot(f64::NAN, f64::INFINITY), f64::INFINITY);
        assert!(hypot(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_hypot_does_not_overflow() {
        let h = hypot(1e300, 1e300);
        assert!((h - 1.4142135623730951e300).abs() <= 1e285);
        let h = hypot(1e-300, 1e-300);
        assert!((h - 1.4142135623730951e-300).abs() <= 1e-315);
    }

    #[test]
    fn test_hypot_iter() {
        assert_eq!(hypot_iter(Vec::new()), 0.0);
        assert!((hypot_iter([2.0, 3.0, 6.0]) - 7.0).abs() <= 7.0 * 2.0 * f64::EPSILON);
        let n = hypot_iter((0..4).map(|_| 0.5));
        assert!((n - 1.0).abs() <= 4.0 * f64::EPSILON);
    }
}
