// Curve constants
//
// Fixed-point values are Q64.64 unless the name says otherwise.

// ============================================================
// RESERVE RATIO
// ============================================================

/// Reserve ratio denominator: ratios are expressed in parts per million
/// 1_000_000 ppm = 1.0, which degenerates the curve to a straight line
pub const MAX_RESERVE_RATIO_PPM: u32 = 1_000_000;

/// Smallest accepted reserve ratio (0.000001)
pub const MIN_RESERVE_RATIO_PPM: u32 = 1;

// ============================================================
// FIXED POINT
// ============================================================

/// Q64 multiplier (2^64), the fixed-point representation of 1.0
pub const Q64: u128 = 1u128 << 64;

/// Low 64 bits mask
pub const MASK_64: u128 = 0xFFFF_FFFF_FFFF_FFFF;

/// ln(2) in Q64.64, rounded down
pub const LN2_Q64_FLOOR: u128 = 0xB172_17F7_D1CF_79AB;

/// ln(2) in Q64.64, rounded up
/// Used for range reduction in exp so the reduced argument is never overestimated
pub const LN2_Q64_CEIL: u128 = LN2_Q64_FLOOR + 1;

// ============================================================
// SERIES LIMITS
// ============================================================

/// Upper bound on series terms for both ln and exp
/// ln converges in at most 22 terms (z^2 <= 1/9), exp in at most 28 (f < ln 2)
pub const MAX_SERIES_TERMS: u32 = 48;

/// Largest binary exponent exp_q64 can apply without leaving u128
/// e^f < 2 for the reduced argument, so (e^f in Q64.64) << 62 stays below 2^127
pub const MAX_EXP_SHIFT: u128 = 62;

/// Lower bound of any growth factor exp_q64 refuses to represent (2^63)
/// exp_q64 only overflows when the exact factor is above this bound
pub const OVERFLOW_GROWTH_BOUND: u128 = 1u128 << 63;
