//! Backend selection and the immutable numerics configuration

use std::fmt;
use std::str::FromStr;

use super::{ChebyshevBackend, PureBackend, SystemBackend, TrigBackend};
use crate::algorithm::elementary::{SqrtOptions, ln_with, sqrt_with};
use crate::algorithm::rootfinding::NewtonOptions;
use crate::error::{Error, Result};

// ============================================================================
// Backend Kind
// ============================================================================

/// Which trigonometric backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Host `f64` methods
    #[default]
    System,

    /// Double-double π/2 reduction with Taylor kernels
    Pure,

    /// Full-period Chebyshev expansions
    Chebyshev,
}

impl BackendKind {
    /// Every backend, in registry order
    pub const ALL: [BackendKind; 3] = [
        BackendKind::System,
        BackendKind::Pure,
        BackendKind::Chebyshev,
    ];

    /// Resolve to the backend implementation
    pub fn backend(&self) -> &'static dyn TrigBackend {
        match self {
            BackendKind::System => &SystemBackend,
            BackendKind::Pure => &PureBackend,
            BackendKind::Chebyshev => &ChebyshevBackend,
        }
    }

    /// Registry name
    pub fn as_str(&self) -> &'static str {
        self.backend().name()
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        let kind = BackendKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_backend(s))?;
        tracing::debug!(name = s, backend = kind.as_str(), "resolved numerics backend");
        Ok(kind)
    }
}

impl TrigBackend for BackendKind {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn sin(&self, x: f64) -> f64 {
        self.backend().sin(x)
    }

    fn cos(&self, x: f64) -> f64 {
        self.backend().cos(x)
    }

    fn tan(&self, x: f64) -> f64 {
        self.backend().tan(x)
    }

    fn sincos(&self, x: f64) -> (f64, f64) {
        self.backend().sincos(x)
    }
}

// ============================================================================
// Numerics Config
// ============================================================================

/// Explicit configuration threaded through numeric calls
///
/// Plain data: `Copy`, and freely shared across threads. Changing a setting
/// means building a new value, never mutating one another thread can see.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericsConfig {
    /// Trigonometric backend (default: System)
    pub backend: BackendKind,

    /// Newton refinement used by [`NumericsConfig::ln`] (default: tol 1e-15, 100 iterations)
    pub newton: NewtonOptions,

    /// Square-root iteration settings (default: tol 1e-15, 100 iterations)
    pub sqrt: SqrtOptions,
}

impl NumericsConfig {
    /// Configuration using the given backend and default iteration settings
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    /// Replace the backend
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Replace the Newton options
    pub fn with_newton(mut self, newton: NewtonOptions) -> Self {
        self.newton = newton;
        self
    }

    /// Replace the square-root options
    pub fn with_sqrt(mut self, sqrt: SqrtOptions) -> Self {
        self.sqrt = sqrt;
        self
    }

    /// The active backend
    #[inline]
    pub fn backend(&self) -> &'static dyn TrigBackend {
        self.backend.backend()
    }

    /// Sine through the active backend
    #[inline]
    pub fn sin(&self, x: f64) -> f64 {
        self.backend().sin(x)
    }

    /// Cosine through the active backend
    #[inline]
    pub fn cos(&self, x: f64) -> f64 {
        self.backend().cos(x)
    }

    /// Tangent through the active backend
    #[inline]
    pub fn tan(&self, x: f64) -> f64 {
        self.backend().tan(x)
    }

    /// `(sin x, cos x)` through the active backend
    #[inline]
    pub fn sincos(&self, x: f64) -> (f64, f64) {
        self.backend().sincos(x)
    }

    /// Natural logarithm with this configuration's Newton options
    pub fn ln(&self, x: f64) -> Result<f64> {
        ln_with(x, &self.newton)
    }

    /// Square root with this configuration's iteration settings
    pub fn sqrt(&self, x: f64) -> f64 {
        sqrt_with(x, &self.sqrt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_parse_backend_names() {
        assert_eq!("system".parse::<BackendKind>().unwrap(), BackendKind::System);
        assert_eq!("PURE".parse::<BackendKind>().unwrap(), BackendKind::Pure);
        assert_eq!(" Chebyshev ".parse::<BackendKind>().unwrap(), BackendKind::Chebyshev);

        let err = "quantum".parse::<BackendKind>().unwrap_err();
        assert_eq!(err, Error::unknown_backend("quantum"));
        assert_eq!(err.to_string(), "Unknown numerics backend: \"quantum\"");
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
            assert_eq!(kind.name(), kind.backend().name());
        }
        assert_eq!(BackendKind::default(), BackendKind::System);
    }

    #[test]
    fn test_config_dispatch() {
        let cfg = NumericsConfig::new(BackendKind::Pure);
        assert_eq!(cfg.backend().name(), "pure");
        assert_eq!(cfg.sin(0.75), crate::algorithm::elementary::trig::sin(0.75));

        let cfg = cfg.with_backend(BackendKind::Chebyshev);
        assert_eq!(cfg.backend().name(), "chebyshev");
        assert!((cfg.cos(1.0) - 1.0f64.cos()).abs() < 1e-15);
        assert_eq!(NumericsConfig::default().backend, BackendKind::System);
    }

    #[test]
    fn test_config_threads_iteration_settings() {
        let cfg = NumericsConfig::default()
            .with_sqrt(SqrtOptions::default().with_max_iter(1))
            .with_newton(NewtonOptions::default().with_max_iter(1));
        // One Newton step from the seed 2 for sqrt(2)
        assert_eq!(cfg.sqrt(2.0), 1.5);
        assert!(cfg.ln(1e100).unwrap_err().is_convergence());

        let cfg = NumericsConfig::default();
        assert_eq!(cfg.sqrt(9.0), 3.0);
        assert!((cfg.ln(2.0).unwrap() - std::f64::consts::LN_2).abs() < 2e-16);
    }

    #[test]
    fn test_config_is_shareable() {
        assert_send_sync::<NumericsConfig>();
        assert_send_sync::<BackendKind>();

        let cfg = NumericsConfig::new(BackendKind::Pure);
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || cfg.sin(i as f64)))
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), cfg.sin(i as f64));
        }
    }
}
