//! Rounding mode tests.
//!
//! These verify the wire decoding of `RoundingMode` and that each mode
//! rounds a non-representable quotient in its stated direction.

use pretty_assertions::assert_eq;
use rstest::rstest;
use softfl_core::{Fpu, FpFlags, InvalidRoundingMode, RoundingMode};

use crate::common::bits;

// ══════════════════════════════════════════════════════════
// 1. Wire decoding
// ══════════════════════════════════════════════════════════

#[test]
fn from_bits_decodes_all_modes() {
    assert_eq!(RoundingMode::from_bits(0), Some(RoundingMode::ToNearestEven));
    assert_eq!(RoundingMode::from_bits(1), Some(RoundingMode::TowardZero));
    assert_eq!(RoundingMode::from_bits(2), Some(RoundingMode::Upward));
    assert_eq!(RoundingMode::from_bits(3), Some(RoundingMode::Downward));
}

#[test]
fn from_bits_rejects_reserved_encodings() {
    for raw in 4..=u8::MAX {
        assert_eq!(RoundingMode::from_bits(raw), None);
    }
}

#[test]
fn try_from_reports_the_offending_encoding() {
    assert_eq!(RoundingMode::try_from(7), Err(InvalidRoundingMode(7)));
}

#[test]
fn default_mode_is_round_to_nearest_even() {
    assert_eq!(RoundingMode::default(), RoundingMode::ToNearestEven);
}

#[test]
fn deserializes_from_json_names_and_aliases() {
    let mode: RoundingMode = serde_json::from_str("\"TowardZero\"").unwrap();
    assert_eq!(mode, RoundingMode::TowardZero);

    let mode: RoundingMode = serde_json::from_str("\"RNE\"").unwrap();
    assert_eq!(mode, RoundingMode::ToNearestEven);

    let mode: RoundingMode = serde_json::from_str("\"RDN\"").unwrap();
    assert_eq!(mode, RoundingMode::Downward);

    assert!(serde_json::from_str::<RoundingMode>("\"Sideways\"").is_err());
}

// ══════════════════════════════════════════════════════════
// 2. Directional rounding of 1/3
// ══════════════════════════════════════════════════════════

// The exact quotient 1/3 lies strictly between two representable
// neighbours, 0x3EAAAAAA below and 0x3EAAAAAB above, and closer to the
// upper one. Each mode must pick the neighbour in its stated direction.
#[rstest]
#[case(RoundingMode::ToNearestEven, 0x3EAA_AAAB)]
#[case(RoundingMode::TowardZero, 0x3EAA_AAAA)]
#[case(RoundingMode::Upward, 0x3EAA_AAAB)]
#[case(RoundingMode::Downward, 0x3EAA_AAAA)]
fn one_third_rounds_per_mode(#[case] mode: RoundingMode, #[case] expected: u32) {
    let r = Fpu::div(bits(1.0), bits(3.0), mode);
    assert_eq!(r.bits, expected);
    assert_eq!(r.flags, FpFlags::NX);
}

// Mirror image for a negative quotient: toward-zero truncates the
// magnitude while Downward grows it.
#[rstest]
#[case(RoundingMode::ToNearestEven, 0xBEAA_AAAB)]
#[case(RoundingMode::TowardZero, 0xBEAA_AAAA)]
#[case(RoundingMode::Upward, 0xBEAA_AAAA)]
#[case(RoundingMode::Downward, 0xBEAA_AAAB)]
fn negative_one_third_rounds_per_mode(#[case] mode: RoundingMode, #[case] expected: u32) {
    let r = Fpu::div(bits(-1.0), bits(3.0), mode);
    assert_eq!(r.bits, expected);
    assert_eq!(r.flags, FpFlags::NX);
}

// ══════════════════════════════════════════════════════════
// 3. Directed modes bracket the exact value
// ══════════════════════════════════════════════════════════

#[test]
fn upward_and_downward_bracket_the_exact_quotient() {
    for (a, b) in [(1.0f32, 3.0f32), (2.0, 7.0), (10.0, 9.0), (-5.0, 11.0)] {
        let down = Fpu::div(bits(a), bits(b), RoundingMode::Downward);
        let up = Fpu::div(bits(a), bits(b), RoundingMode::Upward);
        assert!(
            f32::from_bits(down.bits) < f32::from_bits(up.bits),
            "Downward must be strictly below Upward for an inexact quotient {a}/{b}"
        );
    }
}

#[test]
fn exact_results_are_mode_independent() {
    for mode in crate::common::ALL_MODES {
        let r = Fpu::div(bits(6.0), bits(2.0), mode);
        assert_eq!(f32::from_bits(r.bits), 3.0);
        assert!(r.flags.is_empty(), "exact quotient must raise no flags");
    }
}
