//! Floating-point rounding mode support.
//!
//! The engine supports the four IEEE 754 directed/nearest rounding modes:
//!
//! | Value | Mode          | Description                    |
//! |-------|---------------|--------------------------------|
//! | 0     | ToNearestEven | Round to nearest, ties to even |
//! | 1     | TowardZero    | Truncate toward zero           |
//! | 2     | Upward        | Round toward +∞                |
//! | 3     | Downward      | Round toward −∞                |
//!
//! The mode is threaded as an explicit parameter to every operation; there is
//! no hidden rounding-mode register, so concurrent calls can never observe
//! each other's mode.

use serde::Deserialize;
use thiserror::Error;

/// Rounding mode selected by the caller for a single operation.
///
/// The wire encoding matches the values accepted by the external driver
/// interface; decode one with [`RoundingMode::from_bits`] or `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (default IEEE mode).
    #[default]
    #[serde(alias = "RNE")]
    ToNearestEven = 0,
    /// Round toward zero (truncate the magnitude).
    #[serde(alias = "RTZ")]
    TowardZero = 1,
    /// Round toward +∞.
    #[serde(alias = "RUP")]
    Upward = 2,
    /// Round toward −∞.
    #[serde(alias = "RDN")]
    Downward = 3,
}

/// Error returned when a wire encoding does not name a rounding mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid rounding mode encoding: {0}")]
pub struct InvalidRoundingMode(pub u8);

impl RoundingMode {
    /// Decodes a rounding mode from its wire encoding.
    ///
    /// Returns `None` for encodings above 3, which are reserved.
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::try_from(bits).ok()
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = InvalidRoundingMode;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0 => Ok(Self::ToNearestEven),
            1 => Ok(Self::TowardZero),
            2 => Ok(Self::Upward),
            3 => Ok(Self::Downward),
            _ => Err(InvalidRoundingMode(bits)),
        }
    }
}
