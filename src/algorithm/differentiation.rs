//! Numerical differentiation
//!
//! # Algorithm
//!
//! Central differences `D(h) = (f(x+h) - f(x-h)) / 2h` have an error series
//! in even powers of `h`, so Richardson extrapolation on the halving
//! sequence `h, h/2, h/4, ...` cancels one order per column:
//!
//! ```text
//! A[i][0] = D(h / 2^i)
//! A[i][j] = A[i][j-1] + (A[i][j-1] - A[i-1][j-1]) / (4^j - 1)
//! ```
//!
//! The diagonal entry with the smallest change from its predecessor is
//! returned. Extrapolation stops once that change starts growing, which is
//! where roundoff in `D(h)` overtakes truncation error.

/// Default number of Richardson rows
pub const DEFAULT_RICHARDSON_ROWS: usize = 6;

/// Estimate `f'(x)` with central differences and Richardson extrapolation.
///
/// `h` defaults to `1e-3 * max(1, |x|)`. `max_iter` is the number of
/// halvings (table rows) and is clamped to at least 1.
pub fn derivative_central<F>(f: F, x: f64, h: Option<f64>, max_iter: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut h = h.unwrap_or_else(|| 1e-3 * x.abs().max(1.0));
    let rows = max_iter.max(1);

    let central = |h: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    let mut prev_row = vec![central(h)];
    let mut best = prev_row[0];
    let mut best_change = f64::INFINITY;

    for i in 1..rows {
        h *= 0.5;
        let mut row = Vec::with_capacity(i + 1);
        row.push(central(h));
        let mut factor = 1.0;
        for j in 1..=i {
            factor *= 4.0;
            let value = row[j - 1] + (row[j - 1] - prev_row[j - 1]) / (factor - 1.0);
            row.push(value);
        }

        let change = (row[i] - prev_row[i - 1]).abs();
        if change < best_change {
            best_change = change;
            best = row[i];
        } else if change > 2.0 * best_change {
            break;
        }
        prev_row = row;
    }

    best
}
