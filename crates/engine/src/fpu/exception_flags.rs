//! Floating-point exception flags.
//!
//! Every operation reports the IEEE 754 exception conditions it triggered
//! through a [`FpFlags`] bitmask in its result record:
//!
//! | Bit | Flag | Description         |
//! |-----|------|---------------------|
//! |  0  | DZ   | Divide by Zero      |
//! |  1  | NV   | Invalid Operation   |
//! |  2  | OF   | Overflow            |
//! |  3  | UF   | Underflow           |
//! |  4  | NX   | Inexact             |
//!
//! Flags are computed fresh for each call and never accumulated across calls;
//! they are purely informational and never cause the engine to deviate from
//! returning a well-defined IEEE result.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Floating-point exception flags raised by a single operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FpFlags(u32);

impl FpFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Divide by Zero: a finite nonzero value was divided by an exact zero.
    pub const DZ: Self = Self(1 << 0);
    /// Invalid Operation: an indeterminate form or out-of-range conversion.
    pub const NV: Self = Self(1 << 1);
    /// Overflow: the rounded magnitude exceeded the finite range.
    pub const OF: Self = Self(1 << 2);
    /// Underflow: a tiny nonzero result lost accuracy.
    pub const UF: Self = Self(1 << 3);
    /// Inexact: the rounded result differs from the exact value.
    pub const NX: Self = Self(1 << 4);

    /// Returns the raw flag bitmask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for FpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FpFlags {
    /// Formats the set flags as a short mnemonic list, e.g. `OF|NX`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (flag, name) in [
            (Self::DZ, "DZ"),
            (Self::NV, "NV"),
            (Self::OF, "OF"),
            (Self::UF, "UF"),
            (Self::NX, "NX"),
        ] {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}
