//! Elementary transcendental kernels
//!
//! Each public entry point classifies its argument first, short-circuits
//! NaN/∞/zero, then runs reduction → kernel → reconstruction:
//!
//! ```text
//! sin/cos/tan   reduce_pio2  → Taylor kernel + low-word correction → quadrant table
//! chebyshev::*  reduce_two_pi → Clenshaw on odd/even Chebyshev series
//! exp           reduce_ln2   → [5/5] Padé at r/2, squared → ldexp
//! ln            frexp seed   → Newton on exp(y) - x
//! sqrt          frexp seed   → Newton y ← (y + x/y)/2
//! sinh..atanh   compose exp / ln / sqrt by magnitude band
//! ```
//!
//! Error policy by family:
//! - IEEE propagation (trig, exp, sqrt, hyperbolics, hypot): never fail,
//!   out-of-domain input maps to NaN/∞/0.
//! - Validated input (`ln`, `log`, `log2`, `log10`): return [`crate::error::Result`].

pub mod chebyshev;
pub mod exp;
pub mod hyperbolic;
pub mod log;
pub mod reduction;
pub mod sqrt;
pub mod stable;
pub mod trig;

pub use exp::exp;
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use log::{ln, ln_with, log, log2, log10};
pub use sqrt::{SqrtOptions, sqrt, sqrt_with};
pub use stable::{hypot, hypot_iter};
pub use trig::{cos, sin, sincos, tan};
