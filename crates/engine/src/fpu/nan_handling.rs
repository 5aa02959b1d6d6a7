//! Quiet NaN construction and propagation.
//!
//! The engine draws no signaling/quiet distinction: every NaN operand is
//! treated as quiet, so NaN propagation through add/sub/mul/div raises no
//! Invalid Operation flag. NaNs produced *by* the engine (indeterminate
//! forms such as ∞ − ∞, 0 × ∞, 0 ÷ 0, ∞ ÷ ∞) are the canonical quiet NaN.
//!
//! Propagated NaNs keep their payload with the quiet bit forced on, so a
//! caller-supplied payload survives arithmetic rather than being collapsed.

use crate::fpu::format::Float32;

/// Canonical quiet NaN bit pattern (positive, quiet bit set, zero payload).
pub const CANONICAL_NAN: u32 = 0x7FC0_0000;

/// The quiet bit: the most significant bit of the significand field.
pub const QUIET_BIT: u32 = 0x0040_0000;

/// Returns the canonical quiet NaN as a classified value.
pub fn canonical_nan() -> Float32 {
    Float32::decode(CANONICAL_NAN)
}

/// Propagates a NaN from one of two operands.
///
/// Picks the first operand that is a NaN (left preference) and returns it
/// with the quiet bit set and payload otherwise intact. At least one operand
/// must be a NaN.
pub fn propagate_nan(a: &Float32, b: &Float32) -> Float32 {
    debug_assert!(a.is_nan() || b.is_nan());
    let source = if a.is_nan() { a } else { b };
    Float32::decode(source.encode() | QUIET_BIT)
}
