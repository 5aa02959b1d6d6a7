//! Bit-level binary32 value model.
//!
//! [`Float32`] is the semantic view of a 32-bit floating-point bit pattern:
//! a sign, a classification, and (where meaningful) an unbiased exponent and
//! integer significand. [`Float32::decode`] classifies a raw bit pattern and
//! [`Float32::encode`] is its exact inverse; the pair round-trips every one
//! of the 2^32 patterns, NaN payloads and both zero signs included.
//!
//! Values are immutable once constructed. They are produced either by
//! decoding caller bits or by the rounding unit, and consumed by `encode` —
//! the single point where rounded results become machine bit patterns.

use crate::common::constants::{
    F32_EXP_BIAS, F32_EXP_FIELD_SPECIAL, F32_EXP_MASK, F32_EXP_MAX, F32_EXP_MIN, F32_IMPLICIT_BIT,
    F32_SIG_MASK, F32_SIG_WIDTH, F32_SIGN_BIT,
};

/// Classification of a binary32 value.
///
/// Exactly one class holds for any bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpClass {
    /// Positive or negative zero.
    Zero,
    /// Nonzero value below the normal range; no implicit leading bit.
    Subnormal,
    /// Normalized value with an implicit leading significand bit.
    Normal,
    /// Positive or negative infinity.
    Infinity,
    /// Not-a-number; the 23-bit payload is preserved verbatim.
    Nan,
}

/// Semantic view of a binary32 value.
///
/// Field validity depends on [`class`](Self::class):
/// - `Normal`: `exponent` is the unbiased exponent in `[-126, 127]` and
///   `mantissa` is the 24-bit significand including the implicit bit.
/// - `Subnormal`: `exponent` is fixed at `-126` and `mantissa` is the raw
///   23-bit field with no implicit bit.
/// - `Nan`: `mantissa` carries the nonzero 23-bit payload.
/// - `Zero` / `Infinity`: only `sign` is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Float32 {
    /// Sign bit; true for negative.
    pub sign: bool,
    /// Value classification.
    pub class: FpClass,
    /// Unbiased exponent (valid for `Normal` and `Subnormal`).
    pub exponent: i32,
    /// Integer significand or NaN payload (see [`FpClass`]).
    pub mantissa: u32,
}

impl Float32 {
    /// Decodes a raw bit pattern into its classified form.
    ///
    /// Classification follows the standard binary32 layout: an all-zeros
    /// exponent field selects zero or subnormal, an all-ones field selects
    /// infinity or NaN, and anything else is a normal value with the
    /// implicit leading bit prepended.
    pub fn decode(bits: u32) -> Self {
        let sign = bits & F32_SIGN_BIT != 0;
        let exp_field = (bits & F32_EXP_MASK) >> F32_SIG_WIDTH;
        let frac = bits & F32_SIG_MASK;

        match (exp_field, frac) {
            (0, 0) => Self { sign, class: FpClass::Zero, exponent: 0, mantissa: 0 },
            (0, _) => Self { sign, class: FpClass::Subnormal, exponent: F32_EXP_MIN, mantissa: frac },
            (F32_EXP_FIELD_SPECIAL, 0) => {
                Self { sign, class: FpClass::Infinity, exponent: 0, mantissa: 0 }
            }
            (F32_EXP_FIELD_SPECIAL, _) => {
                Self { sign, class: FpClass::Nan, exponent: 0, mantissa: frac }
            }
            _ => Self {
                sign,
                class: FpClass::Normal,
                exponent: exp_field as i32 - F32_EXP_BIAS,
                mantissa: frac | F32_IMPLICIT_BIT,
            },
        }
    }

    /// Encodes the value back into its 32-bit pattern.
    ///
    /// Exact inverse of [`decode`](Self::decode): the exponent is re-biased
    /// and the fields reassembled without any canonicalization, so NaN
    /// payloads survive the round trip.
    pub fn encode(&self) -> u32 {
        let sign = if self.sign { F32_SIGN_BIT } else { 0 };
        match self.class {
            FpClass::Zero => sign,
            FpClass::Subnormal => sign | (self.mantissa & F32_SIG_MASK),
            FpClass::Normal => {
                let exp_field = (self.exponent + F32_EXP_BIAS) as u32;
                sign | (exp_field << F32_SIG_WIDTH) | (self.mantissa & F32_SIG_MASK)
            }
            FpClass::Infinity => sign | F32_EXP_MASK,
            FpClass::Nan => sign | F32_EXP_MASK | (self.mantissa & F32_SIG_MASK),
        }
    }

    /// A signed zero.
    pub const fn zero(sign: bool) -> Self {
        Self { sign, class: FpClass::Zero, exponent: 0, mantissa: 0 }
    }

    /// A signed infinity.
    pub const fn infinity(sign: bool) -> Self {
        Self { sign, class: FpClass::Infinity, exponent: 0, mantissa: 0 }
    }

    /// The largest finite magnitude with the given sign.
    ///
    /// Produced by the rounding unit when an overflow is directed away from
    /// infinity by the active rounding mode.
    pub(crate) const fn max_finite(sign: bool) -> Self {
        Self {
            sign,
            class: FpClass::Normal,
            exponent: F32_EXP_MAX,
            mantissa: F32_IMPLICIT_BIT | F32_SIG_MASK,
        }
    }

    /// Returns true for either zero.
    pub const fn is_zero(&self) -> bool {
        matches!(self.class, FpClass::Zero)
    }

    /// Returns true for either infinity.
    pub const fn is_infinite(&self) -> bool {
        matches!(self.class, FpClass::Infinity)
    }

    /// Returns true for any NaN.
    pub const fn is_nan(&self) -> bool {
        matches!(self.class, FpClass::Nan)
    }

    /// Returns true for zero, subnormal, or normal values.
    pub const fn is_finite(&self) -> bool {
        matches!(self.class, FpClass::Zero | FpClass::Subnormal | FpClass::Normal)
    }

    /// Exact integer view of a finite nonzero value.
    ///
    /// Returns `(m, e)` such that the magnitude equals `m * 2^e` precisely.
    /// Subnormals use the same formula as normals because their stored
    /// exponent is pinned at the minimum.
    pub(crate) fn significand(&self) -> (u64, i32) {
        debug_assert!(matches!(self.class, FpClass::Subnormal | FpClass::Normal));
        (u64::from(self.mantissa), self.exponent - F32_SIG_WIDTH as i32)
    }
}
