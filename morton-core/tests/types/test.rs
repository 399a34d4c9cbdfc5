//! Unit tests for the coordinate and code value types.

#[cfg(test)]
mod tests {
    use morton_core::{
        Coordinates2D, Coordinates2D16, Coordinates3D, Coordinates3D32, MortonCode, MortonCode32,
        MortonCode64, ParseError,
    };

    // =========================================================================
    // Construction and conversion
    // =========================================================================

    #[test]
    fn test_new_sets_fields() {
        let c = Coordinates2D::new(3u16, 4u16);
        assert_eq!((c.x, c.y), (3, 4));

        let c = Coordinates3D::new(1u32, 2, 3);
        assert_eq!((c.x, c.y, c.z), (1, 2, 3));
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let c: Coordinates2D16 = (5, 6).into();
        assert_eq!(c, Coordinates2D::new(5, 6));
        assert_eq!(<(u16, u16)>::from(c), (5, 6));
        assert_eq!(<[u16; 2]>::from(c), [5, 6]);
        assert_eq!(Coordinates2D16::from([5, 6]), c);

        let c: Coordinates3D32 = [7, 8, 9].into();
        assert_eq!(c, Coordinates3D::new(7, 8, 9));
        assert_eq!(<(u32, u32, u32)>::from(c), (7, 8, 9));
        assert_eq!(<[u32; 3]>::from(c), [7, 8, 9]);
        assert_eq!(Coordinates3D32::from((7, 8, 9)), c);
    }

    #[test]
    fn test_equality_is_component_wise() {
        assert_ne!(Coordinates2D::new(1u16, 2), Coordinates2D::new(2, 1));
        assert_ne!(Coordinates3D::new(1u16, 2, 3), Coordinates3D::new(1, 2, 4));
        assert_eq!(Coordinates3D::<u16>::default(), Coordinates3D::new(0, 0, 0));
    }

    #[test]
    fn test_code_value_and_ordering() {
        let a = MortonCode32::new(5);
        let b: MortonCode32 = 9u32.into();
        assert_eq!(a.value(), 5);
        assert_eq!(u32::from(b), 9);
        assert!(a < b);
        assert_eq!(MortonCode64::default(), MortonCode(0));
    }

    // =========================================================================
    // Display
    // =========================================================================

    #[test]
    fn test_display() {
        assert_eq!(Coordinates2D::new(3u16, 4).to_string(), "(3, 4)");
        assert_eq!(Coordinates3D::new(1u32, 2, 3).to_string(), "(1, 2, 3)");
        assert_eq!(MortonCode(4_293_967_295u32).to_string(), "4293967295");
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("3 4".parse::<Coordinates2D16>(), Ok(Coordinates2D::new(3, 4)));
        assert_eq!(
            "  1\t2\n3 ".parse::<Coordinates3D32>(),
            Ok(Coordinates3D::new(1, 2, 3))
        );
        assert_eq!("63".parse::<MortonCode32>(), Ok(MortonCode(63)));
    }

    #[test]
    fn test_display_then_parse_code() {
        let code = MortonCode64::new(9_223_372_036_853_775_807);
        assert_eq!(code.to_string().parse::<MortonCode64>(), Ok(code));
    }

    #[test]
    fn test_parse_missing_component() {
        assert_eq!(
            "1 2".parse::<Coordinates3D32>(),
            Err(ParseError::MissingComponent { expected: 3, found: 2 })
        );
        assert_eq!(
            "".parse::<MortonCode32>(),
            Err(ParseError::MissingComponent { expected: 1, found: 0 })
        );
    }

    #[test]
    fn test_parse_trailing_input() {
        assert_eq!("1 2 3".parse::<Coordinates2D16>(), Err(ParseError::TrailingInput));
    }

    #[test]
    fn test_parse_invalid_integer() {
        assert_eq!(
            "1 x".parse::<Coordinates2D16>(),
            Err(ParseError::InvalidInteger { index: 1 })
        );
        // Out of range for u16.
        assert_eq!(
            "65536 0".parse::<Coordinates2D16>(),
            Err(ParseError::InvalidInteger { index: 0 })
        );
        assert_eq!("-1".parse::<MortonCode32>(), Err(ParseError::InvalidInteger { index: 0 }));
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::MissingComponent { expected: 3, found: 1 };
        assert_eq!(err.to_string(), "Expected 3 components, found 1");
        assert_eq!(
            ParseError::InvalidInteger { index: 2 }.to_string(),
            "Component 2 is not a valid integer"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(ParseError::TrailingInput);
        assert_eq!(boxed.to_string(), "Unexpected input after last component");
    }
}
