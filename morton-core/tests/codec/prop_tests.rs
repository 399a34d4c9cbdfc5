//! Property-based tests for the `encode`/`decode` facade.

use morton_core::{
    decode, encode, Coordinates2D16, Coordinates2D32, Coordinates3D16, Coordinates3D32,
    MortonCode, StrategyKind,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_facade_round_trip_2d(x in any::<u32>(), y in any::<u32>()) {
        let narrow = Coordinates2D16::new(x as u16, y as u16);
        prop_assert_eq!(decode::<Coordinates2D16>(encode(narrow)), narrow);

        let wide = Coordinates2D32::new(x, y);
        prop_assert_eq!(decode::<Coordinates2D32>(encode(wide)), wide);
    }

    #[test]
    fn prop_facade_round_trip_3d(
        x in 0u32..(1 << 21),
        y in 0u32..(1 << 21),
        z in 0u32..(1 << 21),
    ) {
        let wide = Coordinates3D32::new(x, y, z);
        prop_assert_eq!(decode::<Coordinates3D32>(encode(wide)), wide);

        let narrow = Coordinates3D16::new((x & 0x3FF) as u16, (y & 0x3FF) as u16, (z & 0x3FF) as u16);
        prop_assert_eq!(decode::<Coordinates3D16>(encode(narrow)), narrow);
    }

    #[test]
    fn prop_every_kind_matches_default(x in any::<u16>(), y in any::<u16>()) {
        let c = Coordinates2D16::new(x, y);
        for &kind in StrategyKind::ALL {
            prop_assert_eq!(kind.encode(c), encode(c), "{}", kind);
        }
    }

    #[test]
    fn prop_distinct_codes_are_distinct_points(a in any::<u32>(), b in any::<u32>()) {
        let pa: Coordinates2D16 = decode(MortonCode(a));
        let pb: Coordinates2D16 = decode(MortonCode(b));
        prop_assert_eq!(a == b, pa == pb);
    }
}
