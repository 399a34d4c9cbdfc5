//! Property-based tests for the encoding strategies.
//!
//! Round-trip and cross-strategy agreement over the full valid range of every
//! width/dimension pair.

use morton_core::{LookupTable, MagicBits, PreshiftedLookupTable, Strategy};
use proptest::prelude::*;

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
use morton_core::Bmi;

const MAX_3D_32: u16 = (1 << 10) - 1;
const MAX_3D_64: u32 = (1 << 21) - 1;

/// Assert every strategy in this build returns the reference result.
macro_rules! prop_assert_all_agree {
    (|$s:ident| $call:expr) => {{
        let expected = {
            type $s = MagicBits;
            $call
        };
        {
            type $s = PreshiftedLookupTable;
            prop_assert_eq!($call, expected, "pre-shifted lookup table");
        }
        {
            type $s = LookupTable;
            prop_assert_eq!($call, expected, "lookup table");
        }
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        {
            type $s = Bmi;
            prop_assert_eq!($call, expected, "bmi");
        }
    }};
}

fn round_trips<S: Strategy>(x: u32, y: u32, z: u32) -> bool {
    let (x16, y16, z16) = (x as u16, y as u16, z as u16);
    S::decode_2d_32(S::encode_2d_32(x16, y16)) == (x16, y16)
        && S::decode_2d_64(S::encode_2d_64(x, y)) == (x, y)
        && S::decode_3d_64(S::encode_3d_64(x & MAX_3D_64, y & MAX_3D_64, z & MAX_3D_64))
            == (x & MAX_3D_64, y & MAX_3D_64, z & MAX_3D_64)
        && S::decode_3d_32(S::encode_3d_32(x16 & MAX_3D_32, y16 & MAX_3D_32, z16 & MAX_3D_32))
            == (x16 & MAX_3D_32, y16 & MAX_3D_32, z16 & MAX_3D_32)
}

proptest! {
    // =========================================================================
    // Round-trip
    // =========================================================================

    #[test]
    fn prop_round_trip_every_strategy(x in any::<u32>(), y in any::<u32>(), z in any::<u32>()) {
        prop_assert!(round_trips::<PreshiftedLookupTable>(x, y, z));
        prop_assert!(round_trips::<LookupTable>(x, y, z));
        prop_assert!(round_trips::<MagicBits>(x, y, z));
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        prop_assert!(round_trips::<Bmi>(x, y, z));
    }

    // =========================================================================
    // Cross-strategy agreement
    // =========================================================================

    #[test]
    fn prop_encode_2d_agrees(x in any::<u32>(), y in any::<u32>()) {
        prop_assert_all_agree!(|S| S::encode_2d_32(x as u16, y as u16));
        prop_assert_all_agree!(|S| S::encode_2d_64(x, y));
    }

    #[test]
    fn prop_encode_3d_agrees(
        x in 0..=MAX_3D_64,
        y in 0..=MAX_3D_64,
        z in 0..=MAX_3D_64,
    ) {
        prop_assert_all_agree!(|S| S::encode_3d_64(x, y, z));
        prop_assert_all_agree!(|S| S::encode_3d_32(x as u16 & MAX_3D_32, y as u16 & MAX_3D_32, z as u16 & MAX_3D_32));
    }

    #[test]
    fn prop_encode_3d_32_agrees_on_any_u16(x in any::<u16>(), y in any::<u16>(), z in any::<u16>()) {
        // Bits past the 32-bit code are dropped identically by every strategy.
        prop_assert_all_agree!(|S| S::encode_3d_32(x, y, z));
    }

    #[test]
    fn prop_decode_agrees_on_any_code(m in any::<u32>(), wide in 0..(1u64 << 63)) {
        prop_assert_all_agree!(|S| S::decode_2d_32(m));
        prop_assert_all_agree!(|S| S::decode_3d_32(m));
        prop_assert_all_agree!(|S| S::decode_2d_64(wide));
        prop_assert_all_agree!(|S| S::decode_3d_64(wide));
    }

    // =========================================================================
    // Bit layout
    // =========================================================================

    #[test]
    fn prop_dimensions_occupy_disjoint_lanes(x in any::<u16>(), y in any::<u16>()) {
        let code = MagicBits::encode_2d_32(x, y);
        prop_assert_eq!(code & 0x5555_5555, MagicBits::encode_2d_32(x, 0));
        prop_assert_eq!(code & 0xAAAA_AAAA, MagicBits::encode_2d_32(0, y));
    }

    #[test]
    fn prop_decoded_3d_32_stays_in_budget(m in 0..(1u32 << 30)) {
        let (x, y, z) = PreshiftedLookupTable::decode_3d_32(m);
        prop_assert!(x <= MAX_3D_32 && y <= MAX_3D_32 && z <= MAX_3D_32);
        prop_assert_eq!(PreshiftedLookupTable::encode_3d_32(x, y, z), m);
    }
}
