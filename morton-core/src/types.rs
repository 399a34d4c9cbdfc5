// =============================================================================
// Coordinate and Morton Code Value Types
// =============================================================================
//
// Thin structural wrappers. All of them are `Copy` and live on the caller's
// stack; equality is component-wise for coordinates and value equality for
// codes.

use core::fmt;
use core::str::FromStr;

// =============================================================================
// Coordinates
// =============================================================================

/// A point on a 2D integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinates2D<T> {
    /// X coordinate (dimension 0, even code bits).
    pub x: T,
    /// Y coordinate (dimension 1, odd code bits).
    pub y: T,
}

/// A point on a 3D integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinates3D<T> {
    /// X coordinate (dimension 0, code bits `3k`).
    pub x: T,
    /// Y coordinate (dimension 1, code bits `3k + 1`).
    pub y: T,
    /// Z coordinate (dimension 2, code bits `3k + 2`).
    pub z: T,
}

/// 2D coordinates with 16-bit components, encoded into 32-bit codes.
pub type Coordinates2D16 = Coordinates2D<u16>;
/// 2D coordinates with 32-bit components, encoded into 64-bit codes.
pub type Coordinates2D32 = Coordinates2D<u32>;
/// 3D coordinates with 16-bit components, encoded into 32-bit codes.
pub type Coordinates3D16 = Coordinates3D<u16>;
/// 3D coordinates with 32-bit components, encoded into 64-bit codes.
pub type Coordinates3D32 = Coordinates3D<u32>;

impl<T> Coordinates2D<T> {
    /// Create coordinates from their components.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Coordinates3D<T> {
    /// Create coordinates from their components.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<(T, T)> for Coordinates2D<T> {
    #[inline(always)]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Coordinates2D<T> {
    #[inline(always)]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Coordinates2D<T>> for (T, T) {
    #[inline(always)]
    fn from(c: Coordinates2D<T>) -> Self {
        (c.x, c.y)
    }
}

impl<T> From<Coordinates2D<T>> for [T; 2] {
    #[inline(always)]
    fn from(c: Coordinates2D<T>) -> Self {
        [c.x, c.y]
    }
}

impl<T> From<(T, T, T)> for Coordinates3D<T> {
    #[inline(always)]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<[T; 3]> for Coordinates3D<T> {
    #[inline(always)]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Coordinates3D<T>> for (T, T, T) {
    #[inline(always)]
    fn from(c: Coordinates3D<T>) -> Self {
        (c.x, c.y, c.z)
    }
}

impl<T> From<Coordinates3D<T>> for [T; 3] {
    #[inline(always)]
    fn from(c: Coordinates3D<T>) -> Self {
        [c.x, c.y, c.z]
    }
}

impl<T: fmt::Display> fmt::Display for Coordinates2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Coordinates3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: FromStr + Copy + Default> FromStr for Coordinates2D<T> {
    type Err = ParseError;

    /// Parses whitespace-separated components, e.g. `"3 4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components::<T, 2>(s)?;
        Ok(Self { x, y })
    }
}

impl<T: FromStr + Copy + Default> FromStr for Coordinates3D<T> {
    type Err = ParseError;

    /// Parses whitespace-separated components, e.g. `"1 2 3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse_components::<T, 3>(s)?;
        Ok(Self { x, y, z })
    }
}

/// Read exactly `N` whitespace-separated integers.
fn parse_components<T: FromStr + Copy + Default, const N: usize>(
    s: &str,
) -> Result<[T; N], ParseError> {
    let mut out = [T::default(); N];
    let mut tokens = s.split_ascii_whitespace();

    for (index, slot) in out.iter_mut().enumerate() {
        let token = tokens.next().ok_or(ParseError::MissingComponent {
            expected: N,
            found: index,
        })?;
        *slot = token
            .parse()
            .map_err(|_| ParseError::InvalidInteger { index })?;
    }

    if tokens.next().is_some() {
        return Err(ParseError::TrailingInput);
    }
    Ok(out)
}

// =============================================================================
// Morton Code
// =============================================================================

/// A Morton code: the bit-interleaving of a coordinate's components.
///
/// Ordering follows the numeric value, which is the Z-order traversal of the
/// grid.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MortonCode<T>(pub T);

/// Morton code in 32 bits.
pub type MortonCode32 = MortonCode<u32>;
/// Morton code in 64 bits.
pub type MortonCode64 = MortonCode<u64>;

impl<T: Copy> MortonCode<T> {
    /// Wrap a raw code value.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// The raw code value.
    #[inline(always)]
    pub const fn value(self) -> T {
        self.0
    }
}

impl<T> From<T> for MortonCode<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl From<MortonCode<u32>> for u32 {
    #[inline(always)]
    fn from(m: MortonCode<u32>) -> Self {
        m.0
    }
}

impl From<MortonCode<u64>> for u64 {
    #[inline(always)]
    fn from(m: MortonCode<u64>) -> Self {
        m.0
    }
}

impl<T: fmt::Display> fmt::Display for MortonCode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: FromStr + Copy + Default> FromStr for MortonCode<T> {
    type Err = ParseError;

    /// Parses a single decimal code value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [value] = parse_components::<T, 1>(s)?;
        Ok(Self(value))
    }
}

// =============================================================================
// Parse Errors
// =============================================================================

/// Error type for parsing coordinates and codes from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer components than the value type has dimensions.
    MissingComponent {
        /// Number of components required.
        expected: usize,
        /// Number of components present.
        found: usize,
    },
    /// Extra tokens after the last component.
    TrailingInput,
    /// A component is not an integer of the component type.
    InvalidInteger {
        /// Zero-based position of the offending component.
        index: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingComponent { expected, found } => {
                write!(f, "Expected {} components, found {}", expected, found)
            }
            ParseError::TrailingInput => write!(f, "Unexpected input after last component"),
            ParseError::InvalidInteger { index } => {
                write!(f, "Component {} is not a valid integer", index)
            }
        }
    }
}

impl core::error::Error for ParseError {}
