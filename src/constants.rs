//! Double-precision constants shared by every kernel
//!
//! Grouped as:
//! - IEEE-754 binary64 limits
//! - Fundamental mathematical constants
//! - Cody-Waite splits used by the range reductions
//! - Library-wide default tolerances
//!
//! Multi-part splits satisfy `HI + MID + LO ≈ value` to well beyond 106 bits.
//! Parts documented as "33 bits" carry trailing zero bits so that `k * HI`
//! is exact for `|k| < 2^20`.

// ============================================================================
// IEEE-754 binary64 limits
// ============================================================================

/// Significand bits, including the implicit leading one
pub const DBL_MANT_DIG: u32 = 53;

/// Unit roundoff, 2^-52
pub const DBL_EPS: f64 = f64::EPSILON;

/// Smallest normal exponent
pub const DBL_MIN_EXP: i32 = -1022;

/// Exclusive upper bound for `2^e`
pub const DBL_MAX_EXP: i32 = 1024;

/// Smallest positive normal, 2^-1022
pub const DBL_MIN: f64 = f64::MIN_POSITIVE;

/// Smallest positive subnormal, 2^-1074
pub const DBL_DENORM_MIN: f64 = 4.9406564584124654e-324;

/// Largest finite double
pub const DBL_MAX: f64 = f64::MAX;

/// ln(DBL_MAX); `exp(x)` overflows above this
pub const MAX_LOG: f64 = 709.782712893384;

/// ln(DBL_DENORM_MIN / 2); `exp(x)` rounds to zero below this
pub const MIN_LOG: f64 = -745.1332191019411;

// ============================================================================
// Fundamental constants
// ============================================================================

/// π
pub const PI: f64 = std::f64::consts::PI;
/// π/2
pub const PI_2: f64 = std::f64::consts::FRAC_PI_2;
/// π/4
pub const PI_4: f64 = std::f64::consts::FRAC_PI_4;
/// 2π
pub const TAU: f64 = std::f64::consts::TAU;
/// 1/π
pub const INV_PI: f64 = std::f64::consts::FRAC_1_PI;
/// 2/π
pub const INV_PI_2: f64 = std::f64::consts::FRAC_2_PI;
/// Euler's number
pub const E: f64 = std::f64::consts::E;
/// ln 2
pub const LN2: f64 = std::f64::consts::LN_2;
/// 1/ln 2
pub const INV_LN2: f64 = std::f64::consts::LOG2_E;
/// ln 10
pub const LN10: f64 = std::f64::consts::LN_10;
/// √2
pub const SQRT2: f64 = std::f64::consts::SQRT_2;
/// 1/√2
pub const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

// ============================================================================
// Cody-Waite splits
// ============================================================================

/// π/2 = PI2_HI + PI2_MID + PI2_LO (double-double-double)
pub const PI2_HI: f64 = 1.5707963267948966;
/// Second part of π/2 (0x3C91A62633145C07)
pub const PI2_MID: f64 = 6.123233995736766e-17;
/// Third part of π/2
pub const PI2_LO: f64 = -1.4973849048591698e-33;

/// 2/π = INV_PI_2_HI + INV_PI_2_LO
pub const INV_PI_2_HI: f64 = 0.6366197723675814;
/// Low part of 2/π (0xBC86B01EC5417056)
pub const INV_PI_2_LO: f64 = -3.935735335036497e-17;

/// π/2, first 33 bits
pub const PIO2_1: f64 = 1.57079632673412561417e+00;
/// π/2, next 33 bits
pub const PIO2_2: f64 = 6.07710050630396597660e-11;
/// π/2 - (PIO2_1 + PIO2_2)
pub const PIO2_2T: f64 = 2.02226624879595063154e-21;

/// 2π, first 33 bits
pub const TWO_PI_1: f64 = 4.0 * PIO2_1;
/// 2π, next 33 bits
pub const TWO_PI_2: f64 = 4.0 * PIO2_2;
/// 2π - (TWO_PI_1 + TWO_PI_2)
pub const TWO_PI_3: f64 = 4.0 * PIO2_2T;

/// ln 2, first 32 bits (0x3FE62E42FEE00000)
pub const LN2_HI: f64 = 6.93147180369123816490e-01;
/// ln 2 - LN2_HI (0x3DEA39EF35793C76)
pub const LN2_LO: f64 = 1.90821492927058770002e-10;

// ============================================================================
// Default tolerances
// ============================================================================

/// Relative tolerance used by the property suites
pub const REL_EPS_DEFAULT: f64 = 2e-12;

/// Absolute tolerance used by the property suites
pub const ABS_EPS_DEFAULT: f64 = 1e-12;
