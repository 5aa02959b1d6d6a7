//! Floating-Point Unit (FPU).
//!
//! This module implements the soft-FPU operation surface: single-precision
//! addition, subtraction, multiplication, division, and conversion between
//! `i32` and binary32, all computed without any host floating-point support.
//!
//! Each operation decodes its operands, resolves the special-value cases
//! (zeros, infinities, NaNs), computes an exact integer intermediate, and
//! hands it to the rounding unit exactly once. The result record carries the
//! final bit pattern together with the IEEE exception flags the call raised;
//! anomalous inputs are signaled purely through those flags, never through
//! errors or panics.
//!
//! Operations are organized into submodules:
//! - [`format`]: bit-level decode/encode and value classification.
//! - [`rounding`]: the guard/round/sticky rounding and exception unit.
//! - [`rounding_modes`]: the four explicit rounding modes.
//! - [`exception_flags`]: the per-call exception bitmask.
//! - [`nan_handling`]: quiet NaN construction and propagation.

/// Per-call exception flag bitmask.
pub mod exception_flags;

/// Bit-level binary32 value model.
pub mod format;

/// Quiet NaN construction and propagation.
pub mod nan_handling;

/// Guard/round/sticky rounding and exception unit.
pub(crate) mod rounding;

/// Rounding mode definitions and wire decoding.
pub mod rounding_modes;

use tracing::trace;

use crate::common::constants::{F32_SIG_WIDTH, F32_SIGN_BIT};

use self::exception_flags::FpFlags;
use self::format::{Float32, FpClass};
use self::nan_handling::{canonical_nan, propagate_nan};
use self::rounding::{ExactIntermediate, right_shift_sticky, round, round_significand};
use self::rounding_modes::RoundingMode;

/// Extra low-order headroom bits carried through addition and subtraction
/// (guard, round, sticky) so alignment shifts never lose rounding
/// information.
const ALIGN_BITS: u32 = 3;

/// Result of a floating-point operation: the binary32 bit pattern and the
/// exception flags this call raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpResult {
    /// Result value as raw binary32 bits.
    pub bits: u32,
    /// Exceptions triggered by this operation alone.
    pub flags: FpFlags,
}

/// Result of a float-to-int conversion: the integer value and the exception
/// flags this call raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CvtResult {
    /// Converted integer; saturated to a boundary `i32` on invalid input.
    pub value: i32,
    /// Exceptions triggered by this operation alone.
    pub flags: FpFlags,
}

/// Software floating-point unit.
///
/// All operations are pure associated functions: the rounding mode is an
/// explicit argument and the exception set is part of the return value, so
/// there is no shared control or status register and any number of calls may
/// run concurrently without synchronization.
#[derive(Debug)]
pub struct Fpu;

impl Fpu {
    /// Adds two binary32 values.
    ///
    /// NaN operands propagate quietly with no flag (the engine treats every
    /// NaN as quiet). Opposite-signed infinities produce the canonical NaN
    /// with Invalid Operation. Finite operands are aligned and summed as
    /// exact integers before the single rounding step.
    ///
    /// # Examples
    ///
    /// ```
    /// use softfl_core::{Fpu, RoundingMode};
    ///
    /// let r = Fpu::add(2.5f32.to_bits(), 3.5f32.to_bits(), RoundingMode::ToNearestEven);
    /// assert_eq!(f32::from_bits(r.bits), 6.0);
    /// assert!(r.flags.is_empty());
    /// ```
    pub fn add(a: u32, b: u32, mode: RoundingMode) -> FpResult {
        trace!(a = format_args!("{a:#010x}"), b = format_args!("{b:#010x}"), ?mode, "fadd");
        let x = Float32::decode(a);
        let y = Float32::decode(b);

        if x.is_nan() || y.is_nan() {
            return FpResult { bits: propagate_nan(&x, &y).encode(), flags: FpFlags::NONE };
        }

        // Order by magnitude so the aligned subtraction below never borrows
        // past zero; magnitude order of IEEE encodings is integer order of
        // the sign-stripped bits.
        let (big, small) = if (a & !F32_SIGN_BIT) >= (b & !F32_SIGN_BIT) { (x, y) } else { (y, x) };

        if big.is_infinite() {
            if small.is_infinite() && big.sign != small.sign {
                return FpResult { bits: canonical_nan().encode(), flags: FpFlags::NV };
            }
            return FpResult { bits: big.encode(), flags: FpFlags::NONE };
        }

        if small.is_zero() {
            let value = if big.is_zero() {
                Float32::zero(Self::zero_sum_sign(big.sign, small.sign, mode))
            } else {
                big
            };
            return FpResult { bits: value.encode(), flags: FpFlags::NONE };
        }

        let (mb, eb) = big.significand();
        let (ms, es) = small.significand();
        // Canonical encodings guarantee the larger magnitude also has the
        // larger stored exponent.
        let aligned_big = mb << ALIGN_BITS;
        let aligned_small = right_shift_sticky(ms << ALIGN_BITS, (eb - es) as u32);

        let exact = if big.sign == small.sign {
            ExactIntermediate {
                sign: big.sign,
                mantissa: aligned_big + aligned_small,
                exponent: eb - ALIGN_BITS as i32,
                sticky: false,
            }
        } else {
            let difference = aligned_big - aligned_small;
            if difference == 0 {
                // Exact cancellation: the zero sign is +0 in every mode
                // except Downward.
                let sign = mode == RoundingMode::Downward;
                return FpResult { bits: Float32::zero(sign).encode(), flags: FpFlags::NONE };
            }
            ExactIntermediate {
                sign: big.sign,
                mantissa: difference,
                exponent: eb - ALIGN_BITS as i32,
                sticky: false,
            }
        };

        let (value, flags) = round(&exact, mode);
        FpResult { bits: value.encode(), flags }
    }

    /// Subtracts `b` from `a`.
    ///
    /// Defined as `add(a, -b)`: the result is bit-for-bit identical to
    /// adding the sign-negated second operand, NaNs included.
    pub fn sub(a: u32, b: u32, mode: RoundingMode) -> FpResult {
        Self::add(a, b ^ F32_SIGN_BIT, mode)
    }

    /// Multiplies two binary32 values.
    ///
    /// The result sign is the XOR of the operand signs. Zero times infinity
    /// is the canonical NaN with Invalid Operation. Finite significands are
    /// multiplied exactly in a double-width product, so the only rounding
    /// happens in the final step.
    pub fn mul(a: u32, b: u32, mode: RoundingMode) -> FpResult {
        trace!(a = format_args!("{a:#010x}"), b = format_args!("{b:#010x}"), ?mode, "fmul");
        let x = Float32::decode(a);
        let y = Float32::decode(b);

        if x.is_nan() || y.is_nan() {
            return FpResult { bits: propagate_nan(&x, &y).encode(), flags: FpFlags::NONE };
        }

        let sign = x.sign ^ y.sign;

        if x.is_infinite() || y.is_infinite() {
            if x.is_zero() || y.is_zero() {
                return FpResult { bits: canonical_nan().encode(), flags: FpFlags::NV };
            }
            return FpResult { bits: Float32::infinity(sign).encode(), flags: FpFlags::NONE };
        }

        if x.is_zero() || y.is_zero() {
            return FpResult { bits: Float32::zero(sign).encode(), flags: FpFlags::NONE };
        }

        let (mx, ex) = x.significand();
        let (my, ey) = y.significand();
        let exact = ExactIntermediate {
            sign,
            // At most 48 bits; exact in u64.
            mantissa: mx * my,
            exponent: ex + ey,
            sticky: false,
        };

        let (value, flags) = round(&exact, mode);
        FpResult { bits: value.encode(), flags }
    }

    /// Divides `a` by `b`.
    ///
    /// The indeterminate forms 0 ÷ 0 and ∞ ÷ ∞ produce the canonical NaN
    /// with Invalid Operation; a finite nonzero dividend over zero produces
    /// a signed infinity with Divide by Zero. The finite path runs an exact
    /// integer long division two bits past the target precision, with the
    /// remainder folded into the sticky bit.
    pub fn div(a: u32, b: u32, mode: RoundingMode) -> FpResult {
        trace!(a = format_args!("{a:#010x}"), b = format_args!("{b:#010x}"), ?mode, "fdiv");
        let x = Float32::decode(a);
        let y = Float32::decode(b);

        if x.is_nan() || y.is_nan() {
            return FpResult { bits: propagate_nan(&x, &y).encode(), flags: FpFlags::NONE };
        }

        let sign = x.sign ^ y.sign;

        if x.is_infinite() {
            if y.is_infinite() {
                return FpResult { bits: canonical_nan().encode(), flags: FpFlags::NV };
            }
            return FpResult { bits: Float32::infinity(sign).encode(), flags: FpFlags::NONE };
        }
        if y.is_infinite() {
            return FpResult { bits: Float32::zero(sign).encode(), flags: FpFlags::NONE };
        }

        if x.is_zero() {
            if y.is_zero() {
                return FpResult { bits: canonical_nan().encode(), flags: FpFlags::NV };
            }
            return FpResult { bits: Float32::zero(sign).encode(), flags: FpFlags::NONE };
        }
        if y.is_zero() {
            return FpResult { bits: Float32::infinity(sign).encode(), flags: FpFlags::DZ };
        }

        let (mx, ex) = Self::normalized_significand(&x);
        let (my, ey) = Self::normalized_significand(&y);

        // With both significands normalized to 24 bits the quotient of the
        // widened dividend keeps 26-27 significant bits, two past target
        // precision; any nonzero remainder becomes the sticky residue.
        let dividend = mx << (F32_SIG_WIDTH + ALIGN_BITS);
        let quotient = dividend / my;
        let remainder = dividend % my;

        let exact = ExactIntermediate {
            sign,
            mantissa: quotient,
            exponent: ex - ey - (F32_SIG_WIDTH + ALIGN_BITS) as i32,
            sticky: remainder != 0,
        };

        let (value, flags) = round(&exact, mode);
        FpResult { bits: value.encode(), flags }
    }

    /// Converts a signed 32-bit integer to binary32.
    ///
    /// Exact for magnitudes of 24 significant bits or fewer; wider
    /// magnitudes round under the active mode and raise Inexact only.
    pub fn int_to_float(i: i32, mode: RoundingMode) -> FpResult {
        trace!(i, ?mode, "fcvt.s.w");
        if i == 0 {
            return FpResult { bits: Float32::zero(false).encode(), flags: FpFlags::NONE };
        }

        let exact = ExactIntermediate {
            sign: i < 0,
            mantissa: u64::from(i.unsigned_abs()),
            exponent: 0,
            sticky: false,
        };
        let (value, flags) = round(&exact, mode);
        FpResult { bits: value.encode(), flags }
    }

    /// Converts a binary32 value to a signed 32-bit integer.
    ///
    /// Rounds to an integer under the active mode's tie rule. NaN input and
    /// values outside the `i32` range saturate to the boundary integer
    /// (`i32::MAX` for NaN and positive overflow, `i32::MIN` for negative
    /// overflow) with Invalid Operation and no Inexact.
    pub fn float_to_int(f: u32, mode: RoundingMode) -> CvtResult {
        trace!(f = format_args!("{f:#010x}"), ?mode, "fcvt.w.s");
        let x = Float32::decode(f);

        match x.class {
            FpClass::Nan => return CvtResult { value: i32::MAX, flags: FpFlags::NV },
            FpClass::Infinity => {
                let value = if x.sign { i32::MIN } else { i32::MAX };
                return CvtResult { value, flags: FpFlags::NV };
            }
            FpClass::Zero => return CvtResult { value: 0, flags: FpFlags::NONE },
            FpClass::Subnormal | FpClass::Normal => {}
        }

        let (m, e) = x.significand();
        let (magnitude, inexact) = if e >= 0 {
            // A nonnegative LSB exponent implies a normal significand, so
            // anything shifted past bit 31 is out of range regardless of
            // the low bits.
            if e > 8 {
                return Self::saturate(x.sign);
            }
            (m << e, false)
        } else {
            let shifted = right_shift_sticky(m << 2, (-e) as u32);
            let (inexact, magnitude) = round_significand(x.sign, shifted, mode);
            (magnitude, inexact)
        };

        let in_range = if x.sign { magnitude <= 1 << 31 } else { magnitude < 1 << 31 };
        if !in_range {
            return Self::saturate(x.sign);
        }

        let value = if x.sign { (magnitude as i64).wrapping_neg() as i32 } else { magnitude as i32 };
        let flags = if inexact { FpFlags::NX } else { FpFlags::NONE };
        CvtResult { value, flags }
    }

    /// Sign of an exact zero sum under the given mode: like signs keep the
    /// sign, opposite signs give +0 except Downward, which gives −0.
    fn zero_sum_sign(a: bool, b: bool, mode: RoundingMode) -> bool {
        if a == b { a } else { mode == RoundingMode::Downward }
    }

    /// Significand of a finite nonzero value shifted up to a full 24 bits,
    /// with the LSB exponent adjusted to compensate. Subnormals need this
    /// before division so the quotient keeps enough significant bits.
    fn normalized_significand(v: &Float32) -> (u64, i32) {
        let (m, e) = v.significand();
        let shift = m.leading_zeros() - (63 - F32_SIG_WIDTH);
        (m << shift, e - shift as i32)
    }

    /// Out-of-range conversion result: the boundary integer on the input's
    /// side, with Invalid Operation.
    fn saturate(sign: bool) -> CvtResult {
        let value = if sign { i32::MIN } else { i32::MAX };
        CvtResult { value, flags: FpFlags::NV }
    }
}
