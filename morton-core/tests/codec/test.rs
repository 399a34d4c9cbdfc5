//! Unit tests for the `encode`/`decode` facade.

#[cfg(test)]
mod tests {
    use crate::common;
    use morton_core::{
        decode, decode_with, encode, encode_with, Coordinates2D, Coordinates2D16, Coordinates2D32,
        Coordinates3D, Coordinates3D16, Coordinates3D32, LookupTable, MagicBits, Morton,
        MortonCode, MortonCode32, MortonCode64, PreshiftedLookupTable,
    };

    // =========================================================================
    // Default strategy
    // =========================================================================

    #[test]
    fn test_encode_default_2d() {
        assert_eq!(encode(Coordinates2D16::new(1, 0)), MortonCode(1u32));
        assert_eq!(encode(Coordinates2D16::new(0, 1)), MortonCode(2u32));
        assert_eq!(encode(Coordinates2D16::new(3, 3)), MortonCode(15u32));
        assert_eq!(encode(Coordinates2D16::new(7, 7)), MortonCode(63u32));
        assert_eq!(encode(Coordinates2D32::new(7, 7)), MortonCode(63u64));
    }

    #[test]
    fn test_encode_default_matrix() {
        for (y, row) in common::Z_ORDER_8X8.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let c = Coordinates2D16::new(x as u16, y as u16);
                assert_eq!(encode(c), MortonCode(code));
                assert_eq!(decode::<Coordinates2D16>(MortonCode(code)), c);
            }
        }
    }

    #[test]
    fn test_decode_selects_dimensionality_by_type() {
        let code = MortonCode32::new(63);
        let flat: Coordinates2D16 = decode(code);
        let cube: Coordinates3D16 = decode(code);
        assert_eq!(flat, Coordinates2D::new(7, 7));
        assert_eq!(cube, Coordinates3D::new(3, 3, 3));
    }

    #[test]
    fn test_regression_64_through_facade() {
        // 1971/1951/975 fit the 21-bit budget of 64-bit codes.
        let (x, y, z) = common::REGRESSION_3D;
        let c = Coordinates3D32::new(x as u32, y as u32, z as u32);
        let code = encode(c);
        assert_eq!(code, MortonCode(common::REGRESSION_3D_CODE as u64));
        assert_eq!(decode::<Coordinates3D32>(code), c);

        let (x, y, z) = common::REGRESSION_3D_64;
        let c = Coordinates3D32::new(x, y, z);
        assert_eq!(encode(c), MortonCode64::new(common::REGRESSION_3D_64_CODE));
        assert_eq!(decode::<Coordinates3D32>(MortonCode(common::REGRESSION_3D_64_CODE)), c);
    }

    #[test]
    fn test_budget_maxima_through_facade() {
        let m = Coordinates3D16::MAX_COMPONENT;
        assert_eq!(encode(Coordinates3D16::new(m, m, m)), MortonCode((1u32 << 30) - 1));

        let m = Coordinates3D32::MAX_COMPONENT;
        assert_eq!(encode(Coordinates3D32::new(m, m, m)), MortonCode((1u64 << 63) - 1));
        assert_eq!(
            decode::<Coordinates3D32>(MortonCode((1u64 << 63) - 1)),
            Coordinates3D::new(m, m, m)
        );
    }

    // =========================================================================
    // Explicit strategy
    // =========================================================================

    #[test]
    fn test_explicit_strategies_agree() {
        let c = Coordinates3D16::new(1023, 512, 7);
        let reference = encode_with(c, MagicBits);
        assert_eq!(encode_with(c, PreshiftedLookupTable), reference);
        assert_eq!(encode_with(c, LookupTable), reference);
        assert_eq!(encode(c), reference);
        assert_eq!(decode_with::<Coordinates3D16, _>(reference, LookupTable), c);
    }

    #[test]
    fn test_trait_methods_match_free_functions() {
        let c = Coordinates2D32::new(0xDEAD_BEEF, 0x0123_4567);
        let code = c.encode_with::<PreshiftedLookupTable>();
        assert_eq!(code, encode_with(c, PreshiftedLookupTable));
        assert_eq!(Coordinates2D32::decode_with::<MagicBits>(code), c);
    }

    #[test]
    fn test_bit_budget_constants() {
        assert_eq!(Coordinates2D16::BITS_PER_COMPONENT, 16);
        assert_eq!(Coordinates2D32::BITS_PER_COMPONENT, 32);
        assert_eq!(Coordinates3D16::BITS_PER_COMPONENT, 10);
        assert_eq!(Coordinates3D32::BITS_PER_COMPONENT, 21);
        assert_eq!(Coordinates2D16::MAX_COMPONENT, u16::MAX);
        assert_eq!(Coordinates3D16::MAX_COMPONENT, common::MAX_3D_32);
        assert_eq!(Coordinates3D32::MAX_COMPONENT, common::MAX_3D_64);
    }

    // =========================================================================
    // Debug-build precondition checks
    // =========================================================================

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "maximum x coordinate is 2^10 - 1")]
    fn test_debug_rejects_wide_3d_32_component() {
        let (x, y, z) = common::REGRESSION_3D;
        let _ = encode(Coordinates3D16::new(x, y, z));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "maximum z coordinate is 2^10 - 1")]
    fn test_debug_rejects_wide_3d_32_z() {
        let _ = encode_with(Coordinates3D16::new(0, 0, 1024), MagicBits);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "maximum y coordinate is 2^21 - 1")]
    fn test_debug_rejects_wide_3d_64_component() {
        let _ = encode(Coordinates3D32::new(0, 1 << 21, 0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "maximum 3D code is 2^30 - 1")]
    fn test_debug_rejects_wide_3d_32_code() {
        let _: Coordinates3D16 = decode(MortonCode(common::REGRESSION_3D_CODE));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "maximum 3D code is 2^63 - 1")]
    fn test_debug_rejects_wide_3d_64_code() {
        let _: Coordinates3D32 = decode(MortonCode(1u64 << 63));
    }

    #[test]
    fn test_2d_has_no_precondition() {
        let c = Coordinates2D16::new(u16::MAX, u16::MAX);
        assert_eq!(encode(c), MortonCode(u32::MAX));
        assert_eq!(decode::<Coordinates2D16>(MortonCode(u32::MAX)), c);
    }
}
