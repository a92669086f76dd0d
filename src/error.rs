//! Error types for transcendr

use thiserror::Error;

/// Result type alias using transcendr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the validated-input function family
///
/// The IEEE-propagation family (trig, exp, sqrt, hyperbolics) never returns
/// an error: out-of-domain and non-finite inputs map to NaN/Inf/0 directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Argument outside the mathematical domain of the operation
    #[error("Domain error in {op}: {reason} (got {value})")]
    Domain {
        /// The operation that rejected the argument
        op: &'static str,
        /// The offending value
        value: f64,
        /// Why the value is outside the domain
        reason: &'static str,
    },

    /// Iterative method did not reach its tolerance
    #[error(
        "Convergence error after {iterations} iterations: residual={residual:e}, target_tol={tolerance:e}"
    )]
    Convergence {
        /// Iterations performed before giving up
        iterations: usize,
        /// Last observed residual |f(x)|
        residual: f64,
        /// Relative tolerance that was requested
        tolerance: f64,
    },

    /// Result is not representable as a finite double
    #[error("Overflow in {op}: 2^{exponent} exceeds the largest finite double")]
    Overflow {
        /// The operation that overflowed
        op: &'static str,
        /// The binary exponent that was requested
        exponent: i32,
    },

    /// Backend name does not match any known backend
    #[error("Unknown numerics backend: {name:?}")]
    UnknownBackend {
        /// The name that failed to resolve
        name: String,
    },
}

impl Error {
    /// Create a domain error
    pub fn domain(op: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Domain { op, value, reason }
    }

    /// Create a convergence error
    pub fn convergence(iterations: usize, residual: f64, tolerance: f64) -> Self {
        Self::Convergence {
            iterations,
            residual,
            tolerance,
        }
    }

    /// Create an overflow error
    pub fn overflow(op: &'static str, exponent: i32) -> Self {
        Self::Overflow { op, exponent }
    }

    /// Create an unknown backend error
    pub fn unknown_backend(name: impl Into<String>) -> Self {
        Self::UnknownBackend { name: name.into() }
    }

    /// Returns true if this error came from an iterative method
    #[inline]
    pub fn is_convergence(&self) -> bool {
        matches!(self, Error::Convergence { .. })
    }

    /// Returns true if this error is a domain violation
    #[inline]
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain { .. })
    }
}
