//! Shared helpers for the soft-FPU test suite.

use softfl_core::RoundingMode;

/// Every rounding mode, for exhaustive per-mode checks.
pub const ALL_MODES: [RoundingMode; 4] = [
    RoundingMode::ToNearestEven,
    RoundingMode::TowardZero,
    RoundingMode::Upward,
    RoundingMode::Downward,
];

/// Shorthand: the bit pattern of a host `f32` literal.
pub fn bits(f: f32) -> u32 {
    f.to_bits()
}

/// Positive zero bit pattern.
pub const POS_ZERO: u32 = 0x0000_0000;

/// Negative zero bit pattern.
pub const NEG_ZERO: u32 = 0x8000_0000;

/// Positive infinity bit pattern.
pub const POS_INF: u32 = 0x7F80_0000;

/// Negative infinity bit pattern.
pub const NEG_INF: u32 = 0xFF80_0000;

/// Largest finite positive value.
pub const MAX_FINITE: u32 = 0x7F7F_FFFF;

/// Smallest positive normal value (2^-126).
pub const MIN_NORMAL: u32 = 0x0080_0000;

/// Smallest positive subnormal value (2^-149).
pub const MIN_SUBNORMAL: u32 = 0x0000_0001;

/// Canonical quiet NaN produced by indeterminate forms.
pub const CANONICAL_NAN: u32 = 0x7FC0_0000;
