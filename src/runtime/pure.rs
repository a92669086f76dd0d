//! Backend built on the double-double π/2 reduction

use crate::algorithm::elementary::trig as kernels;

impl_trig_backend!(Pure, "pure", kernels);
