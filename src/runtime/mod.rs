//! Trigonometric backends and the explicit numerics configuration
//!
//! A backend is a named strategy exposing `sin`/`cos`/`tan`. Callers pick
//! one through a [`NumericsConfig`] value that they own and pass around;
//! there is no process-wide selector to mutate.
//!
//! # Architecture
//!
//! ```text
//! NumericsConfig (Copy, immutable)
//! ├── backend: BackendKind ──► &'static dyn TrigBackend
//! │                             ├── SystemBackend     "system"     host f64 methods
//! │                             ├── PureBackend       "pure"       double-double reduction
//! │                             └── ChebyshevBackend  "chebyshev"  Clenshaw series
//! ├── newton: NewtonOptions   (ln refinement)
//! └── sqrt:   SqrtOptions
//! ```
//!
//! # Example
//!
//! ```
//! use transcendr::runtime::{NumericsConfig, TrigBackend};
//!
//! let cfg = NumericsConfig::default().with_backend("pure".parse().unwrap());
//! assert_eq!(cfg.backend().name(), "pure");
//! assert!((cfg.sin(0.5) - 0.5f64.sin()).abs() < 1e-15);
//! ```

/// Generate a unit-struct backend that forwards to a kernel module.
///
/// `$kernels` must be a module in scope exposing `sin`, `cos`, `tan` and
/// `sincos` with `f64` signatures.
macro_rules! impl_trig_backend {
    ($name:ident, $label:literal, $kernels:ident) => {
        paste::paste! {
            #[doc = "Trigonometric backend `\"" $label "\"`"]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct [<$name Backend>];

            impl [<$name Backend>] {
                /// Registry name of this backend
                pub const NAME: &'static str = $label;
            }

            impl $crate::runtime::TrigBackend for [<$name Backend>] {
                #[inline]
                fn name(&self) -> &'static str {
                    Self::NAME
                }

                #[inline]
                fn sin(&self, x: f64) -> f64 {
                    $kernels::sin(x)
                }

                #[inline]
                fn cos(&self, x: f64) -> f64 {
                    $kernels::cos(x)
                }

                #[inline]
                fn tan(&self, x: f64) -> f64 {
                    $kernels::tan(x)
                }

                #[inline]
                fn sincos(&self, x: f64) -> (f64, f64) {
                    $kernels::sincos(x)
                }
            }
        }
    };
}

mod chebyshev;
mod config;
mod pure;
mod system;

pub use chebyshev::ChebyshevBackend;
pub use config::{BackendKind, NumericsConfig};
pub use pure::PureBackend;
pub use system::SystemBackend;

/// Capability contract every trigonometric backend satisfies
///
/// Implementations are stateless and return NaN for any non-finite input.
pub trait TrigBackend: Send + Sync {
    /// Registry name, e.g. `"pure"`
    fn name(&self) -> &'static str;

    /// Sine
    fn sin(&self, x: f64) -> f64;

    /// Cosine
    fn cos(&self, x: f64) -> f64;

    /// Tangent
    fn tan(&self, x: f64) -> f64;

    /// `(sin x, cos x)`; backends with a shared reduction override this
    fn sincos(&self, x: f64) -> (f64, f64) {
        (self.sin(x), self.cos(x))
    }
}
