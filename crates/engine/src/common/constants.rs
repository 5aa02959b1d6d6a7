//! IEEE 754 binary32 layout constants.
//!
//! The single-precision format packs one sign bit, an 8-bit biased exponent,
//! and a 23-bit trailing significand into 32 bits:
//!
//! | Bits  | Field                 |
//! |-------|-----------------------|
//! | 31    | Sign                  |
//! | 30–23 | Biased exponent       |
//! | 22–0  | Trailing significand  |

/// Bit mask for the sign bit (bit 31).
pub const F32_SIGN_BIT: u32 = 0x8000_0000;

/// Bit mask for the 8-bit biased exponent field (bits 30–23).
pub const F32_EXP_MASK: u32 = 0x7F80_0000;

/// Bit mask for the 23-bit trailing significand field (bits 22–0).
pub const F32_SIG_MASK: u32 = 0x007F_FFFF;

/// Width of the trailing significand field in bits.
pub const F32_SIG_WIDTH: u32 = 23;

/// The implicit leading significand bit of a normal value (bit 23).
pub const F32_IMPLICIT_BIT: u32 = 1 << F32_SIG_WIDTH;

/// Exponent bias applied to the stored exponent field.
pub const F32_EXP_BIAS: i32 = 127;

/// Biased exponent field value reserved for infinities and NaNs.
pub const F32_EXP_FIELD_SPECIAL: u32 = 0xFF;

/// Smallest unbiased exponent of a normal value. Subnormals share it.
pub const F32_EXP_MIN: i32 = -126;

/// Largest unbiased exponent of a finite value.
pub const F32_EXP_MAX: i32 = 127;
