//! Rounding and exception unit.
//!
//! Every arithmetic operation reduces to an [`ExactIntermediate`]: a sign,
//! an exact integer mantissa with unbounded binary exponent, and a sticky
//! flag summarizing any residue the operation could not keep in the mantissa
//! (a division remainder, for instance). This module performs the single
//! rounding step that turns that exact value into a representable binary32
//! result and the Inexact/Overflow/Underflow portion of the exception set.
//!
//! The mechanism is the classic guard/round/sticky scheme: the mantissa is
//! normalized so its leading bit sits at a fixed position with two extra
//! bits below the 24 retained ones. Those two bits form a ternary residue —
//! `00` exact, `01` below the halfway point, `10` exactly halfway, `11`
//! above it — which is all any of the four rounding modes needs to choose
//! between truncating and incrementing the magnitude.

use crate::common::constants::{F32_EXP_MAX, F32_EXP_MIN, F32_SIG_WIDTH};
use crate::fpu::exception_flags::FpFlags;
use crate::fpu::format::{Float32, FpClass};
use crate::fpu::rounding_modes::RoundingMode;

/// Bit position of the normalized leading significand bit: 24 retained bits
/// plus two rounding bits below them.
const LEAD_BIT: u32 = F32_SIG_WIDTH + 2;

/// Exact pre-rounding result of an operation.
///
/// Represents the value `(-1)^sign * mantissa * 2^exponent`, with `sticky`
/// recording whether any nonzero residue exists strictly below the mantissa
/// LSB. Operation-local: it never escapes the engine.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExactIntermediate {
    /// Sign of the exact result.
    pub sign: bool,
    /// Exact integer mantissa; must be nonzero (zeros are handled by
    /// operation dispatch before reaching the rounding unit).
    pub mantissa: u64,
    /// Power-of-two weight of the mantissa LSB.
    pub exponent: i32,
    /// True if a nonzero residue below the LSB was discarded.
    pub sticky: bool,
}

/// Right-shifts while preserving the rounding property: the result's lowest
/// bit is OR'd with every bit shifted out, so a nonzero discarded residue
/// is never forgotten.
pub(crate) fn right_shift_sticky(value: u64, shift: u32) -> u64 {
    if shift == 0 {
        return value;
    }
    if shift >= u64::BITS {
        return u64::from(value != 0);
    }
    let residue = value & ((1u64 << shift) - 1);
    (value >> shift) | u64::from(residue != 0)
}

/// Normalizes an exact intermediate so the leading bit sits at [`LEAD_BIT`].
///
/// Returns the unbiased exponent of the leading bit and the 26-bit aligned
/// significand with the sticky flag folded into its lowest bit.
fn normalize(exact: &ExactIntermediate) -> (i32, u64) {
    debug_assert!(exact.mantissa != 0);
    let msb = 63 - exact.mantissa.leading_zeros() as i32;
    let lead_exponent = exact.exponent + msb;

    let mut sig = if msb > LEAD_BIT as i32 {
        right_shift_sticky(exact.mantissa, (msb - LEAD_BIT as i32) as u32)
    } else {
        // Left shifts only occur for exact intermediates (no residue can
        // hide below a mantissa that is already narrower than 26 bits).
        debug_assert!(!exact.sticky || msb >= LEAD_BIT as i32);
        exact.mantissa << (LEAD_BIT as i32 - msb)
    };
    if exact.sticky {
        sig |= 1;
    }
    (lead_exponent, sig)
}

/// Rounds a significand carrying two residue bits below its retained LSB.
///
/// Returns whether the residue was nonzero and the rounded significand with
/// the residue bits consumed. An increment may carry into the bit above the
/// retained width; callers handle the exponent adjustment.
pub(crate) fn round_significand(
    sign: bool,
    mut sig: u64,
    mode: RoundingMode,
) -> (bool, u64) {
    let inexact = sig & 3 != 0;
    if inexact {
        match mode {
            // Adding one at the residue midpoint plus the retained LSB
            // rounds up on more-than-half and on even ties only.
            RoundingMode::ToNearestEven => sig += ((sig >> 2) & 1) + 1,
            RoundingMode::TowardZero => {}
            RoundingMode::Upward => {
                if !sign {
                    sig += 3;
                }
            }
            RoundingMode::Downward => {
                if sign {
                    sig += 3;
                }
            }
        }
    }
    (inexact, sig >> 2)
}

/// Result of a mode-directed overflow.
///
/// Saturates to signed infinity, except when the mode points away from that
/// infinity (TowardZero always; Upward for negative results; Downward for
/// positive ones), which yields the largest finite magnitude instead.
fn round_overflow(sign: bool, mode: RoundingMode) -> (Float32, FpFlags) {
    let to_finite = match mode {
        RoundingMode::ToNearestEven => false,
        RoundingMode::TowardZero => true,
        RoundingMode::Upward => sign,
        RoundingMode::Downward => !sign,
    };
    let value = if to_finite { Float32::max_finite(sign) } else { Float32::infinity(sign) };
    (value, FpFlags::OF | FpFlags::NX)
}

/// Rounds an exact intermediate to a representable binary32 value.
///
/// Performs normalization, subnormalization below the normal range, the
/// mode-directed rounding decision, and derives the Inexact, Overflow, and
/// Underflow flags. Underflow follows tininess-after-rounding with loss of
/// accuracy: it fires only when the result lands in the subnormal/zero range
/// *and* differs from the exact value.
pub(crate) fn round(exact: &ExactIntermediate, mode: RoundingMode) -> (Float32, FpFlags) {
    let sign = exact.sign;
    let mut flags = FpFlags::NONE;

    let (mut exponent, sig) = normalize(exact);
    if exponent > F32_EXP_MAX {
        return round_overflow(sign, mode);
    }

    // Subnormalize first so the residue bits describe the distance to an
    // actually representable value.
    let shifted = if exponent < F32_EXP_MIN {
        right_shift_sticky(sig, (F32_EXP_MIN - exponent) as u32)
    } else {
        sig
    };

    let (inexact, mut rounded) = round_significand(sign, shifted, mode);
    if inexact {
        flags |= FpFlags::NX;
        // An all-ones significand that rounds up carries into bit 24; the
        // significand halves and the exponent grows by one.
        if rounded == 1 << (F32_SIG_WIDTH + 1) {
            exponent += 1;
            rounded >>= 1;
        }
    }

    if exponent < F32_EXP_MIN {
        if rounded == 1 << F32_SIG_WIDTH {
            // Rounding crossed into the smallest normal. Tininess is judged
            // on the unbounded-exponent rounding: underflow fires only if
            // that rounding would not have carried out of the 24-bit range.
            if round_significand(sign, sig, mode).1 != 1 << (F32_SIG_WIDTH + 1) {
                flags |= FpFlags::UF;
            }
            let value = Float32 {
                sign,
                class: FpClass::Normal,
                exponent: F32_EXP_MIN,
                mantissa: 1 << F32_SIG_WIDTH,
            };
            return (value, flags);
        }

        if inexact {
            flags |= FpFlags::UF;
        }
        let value = if rounded == 0 {
            Float32::zero(sign)
        } else {
            Float32 {
                sign,
                class: FpClass::Subnormal,
                exponent: F32_EXP_MIN,
                mantissa: rounded as u32,
            }
        };
        return (value, flags);
    }

    // The rounding carry may have pushed a maximal-exponent value over.
    if exponent > F32_EXP_MAX {
        return round_overflow(sign, mode);
    }

    let value = Float32 { sign, class: FpClass::Normal, exponent, mantissa: rounded as u32 };
    (value, flags)
}
