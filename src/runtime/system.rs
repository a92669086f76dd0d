//! Host-library backend

/// Thin wrappers over the host `f64` methods with the crate's NaN policy.
mod host {
    #[inline]
    pub fn sin(x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        x.sin()
    }

    #[inline]
    pub fn cos(x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        x.cos()
    }

    #[inline]
    pub fn tan(x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        x.tan()
    }

    #[inline]
    pub fn sincos(x: f64) -> (f64, f64) {
        if !x.is_finite() {
            return (f64::NAN, f64::NAN);
        }
        x.sin_cos()
    }
}

impl_trig_backend!(System, "system", host);
