// =============================================================================
// Dispatch Facade
// =============================================================================
//
// Routes a coordinate (or code) to the width/dimension-specific entry point of
// a strategy. The coordinate type selects the width pair and dimensionality,
// the strategy type parameter selects the algorithm; both are resolved at
// compile time.
//
// 3D inputs have a smaller bit budget than their component type (10 bits for
// 32-bit codes, 21 for 64-bit codes). Debug builds assert it; release builds
// wrap silently.

use crate::strategy::{DefaultStrategy, Strategy};
use crate::types::{Coordinates2D, Coordinates3D, MortonCode};

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::Coordinates2D<u16> {}
    impl Sealed for crate::Coordinates2D<u32> {}
    impl Sealed for crate::Coordinates3D<u16> {}
    impl Sealed for crate::Coordinates3D<u32> {}
}

/// A coordinate type with a Morton encoding.
///
/// Implemented for [`Coordinates2D`] and [`Coordinates3D`] with `u16`
/// components (32-bit codes) and `u32` components (64-bit codes).
pub trait Morton: sealed::Sealed + Copy {
    /// Code type produced by encoding.
    type Code: Copy;

    /// Component type of the coordinates.
    type Component: Copy;

    /// Number of component bits that fit into the code.
    const BITS_PER_COMPONENT: u32;

    /// Largest component value inside the bit budget.
    const MAX_COMPONENT: Self::Component;

    /// Encode with strategy `S`.
    fn encode_with<S: Strategy>(self) -> MortonCode<Self::Code>;

    /// Decode with strategy `S`.
    fn decode_with<S: Strategy>(code: MortonCode<Self::Code>) -> Self;
}

impl Morton for Coordinates2D<u16> {
    type Code = u32;
    type Component = u16;
    const BITS_PER_COMPONENT: u32 = 16;
    const MAX_COMPONENT: u16 = u16::MAX;

    #[inline(always)]
    fn encode_with<S: Strategy>(self) -> MortonCode<u32> {
        MortonCode(S::encode_2d_32(self.x, self.y))
    }

    #[inline(always)]
    fn decode_with<S: Strategy>(code: MortonCode<u32>) -> Self {
        let (x, y) = S::decode_2d_32(code.0);
        Self { x, y }
    }
}

impl Morton for Coordinates2D<u32> {
    type Code = u64;
    type Component = u32;
    const BITS_PER_COMPONENT: u32 = 32;
    const MAX_COMPONENT: u32 = u32::MAX;

    #[inline(always)]
    fn encode_with<S: Strategy>(self) -> MortonCode<u64> {
        MortonCode(S::encode_2d_64(self.x, self.y))
    }

    #[inline(always)]
    fn decode_with<S: Strategy>(code: MortonCode<u64>) -> Self {
        let (x, y) = S::decode_2d_64(code.0);
        Self { x, y }
    }
}

impl Morton for Coordinates3D<u16> {
    type Code = u32;
    type Component = u16;
    const BITS_PER_COMPONENT: u32 = 10;
    const MAX_COMPONENT: u16 = (1 << 10) - 1;

    #[inline(always)]
    fn encode_with<S: Strategy>(self) -> MortonCode<u32> {
        debug_assert!(self.x <= Self::MAX_COMPONENT, "maximum x coordinate is 2^10 - 1 for 32-bit codes");
        debug_assert!(self.y <= Self::MAX_COMPONENT, "maximum y coordinate is 2^10 - 1 for 32-bit codes");
        debug_assert!(self.z <= Self::MAX_COMPONENT, "maximum z coordinate is 2^10 - 1 for 32-bit codes");
        MortonCode(S::encode_3d_32(self.x, self.y, self.z))
    }

    #[inline(always)]
    fn decode_with<S: Strategy>(code: MortonCode<u32>) -> Self {
        debug_assert!(code.0 < 1 << 30, "maximum 3D code is 2^30 - 1 for 32-bit codes");
        let (x, y, z) = S::decode_3d_32(code.0);
        Self { x, y, z }
    }
}

impl Morton for Coordinates3D<u32> {
    type Code = u64;
    type Component = u32;
    const BITS_PER_COMPONENT: u32 = 21;
    const MAX_COMPONENT: u32 = (1 << 21) - 1;

    #[inline(always)]
    fn encode_with<S: Strategy>(self) -> MortonCode<u64> {
        debug_assert!(self.x <= Self::MAX_COMPONENT, "maximum x coordinate is 2^21 - 1 for 64-bit codes");
        debug_assert!(self.y <= Self::MAX_COMPONENT, "maximum y coordinate is 2^21 - 1 for 64-bit codes");
        debug_assert!(self.z <= Self::MAX_COMPONENT, "maximum z coordinate is 2^21 - 1 for 64-bit codes");
        MortonCode(S::encode_3d_64(self.x, self.y, self.z))
    }

    #[inline(always)]
    fn decode_with<S: Strategy>(code: MortonCode<u64>) -> Self {
        debug_assert!(code.0 < 1 << 63, "maximum 3D code is 2^63 - 1 for 64-bit codes");
        let (x, y, z) = S::decode_3d_64(code.0);
        Self { x, y, z }
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Encode `coordinates` with [`DefaultStrategy`].
///
/// ```
/// use morton_core::{encode, Coordinates2D, MortonCode};
///
/// assert_eq!(encode(Coordinates2D::<u16>::new(7, 7)), MortonCode(63u32));
/// ```
#[inline(always)]
pub fn encode<C: Morton>(coordinates: C) -> MortonCode<C::Code> {
    coordinates.encode_with::<DefaultStrategy>()
}

/// Encode `coordinates` with the given strategy.
#[inline(always)]
pub fn encode_with<C: Morton, S: Strategy>(coordinates: C, _strategy: S) -> MortonCode<C::Code> {
    coordinates.encode_with::<S>()
}

/// Decode `code` with [`DefaultStrategy`].
///
/// The coordinate type picks the dimensionality, so 32-bit codes can be read
/// back as either [`Coordinates2D<u16>`] or [`Coordinates3D<u16>`].
///
/// ```
/// use morton_core::{decode, Coordinates3D, MortonCode};
///
/// let c: Coordinates3D<u16> = decode(MortonCode(63u32));
/// assert_eq!(c, Coordinates3D::new(3, 3, 3));
/// ```
#[inline(always)]
pub fn decode<C: Morton>(code: MortonCode<C::Code>) -> C {
    C::decode_with::<DefaultStrategy>(code)
}

/// Decode `code` with the given strategy.
#[inline(always)]
pub fn decode_with<C: Morton, S: Strategy>(code: MortonCode<C::Code>, _strategy: S) -> C {
    C::decode_with::<S>(code)
}
