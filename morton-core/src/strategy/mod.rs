// =============================================================================
// Encoding Strategies
// =============================================================================
//
// Four interchangeable implementations of the same bijection. Each strategy is
// a zero-sized marker type implementing the sealed `Strategy` trait, so the
// choice is made at compile time and monomorphized away. All strategies agree
// bit-for-bit on every input inside the bit budget of a width/dimension pair.

use crate::codec::{decode_with, encode_with, Morton};
use crate::types::MortonCode;

/// Pre-shifted lookup tables (one table per dimension).
pub mod preshifted;

/// Single base lookup table plus a per-dimension shift.
pub mod lookup;

/// Mask/shift bit spreading ("magic bits").
pub mod magic_bits;

/// BMI2 `pdep`/`pext`.
#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
pub mod bmi;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

pub use lookup::LookupTable;
pub use magic_bits::MagicBits;
pub use preshifted::PreshiftedLookupTable;

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
pub use bmi::Bmi;

/// Whether this build carries the BMI2 strategy.
///
/// Resolved when the crate is compiled (`-C target-feature=+bmi2`); there is no
/// runtime CPU probe.
pub const HAS_BMI2: bool = cfg!(all(target_arch = "x86_64", target_feature = "bmi2"));

/// Strategy used by [`encode`](crate::encode) and [`decode`](crate::decode).
#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
pub type DefaultStrategy = Bmi;

/// Strategy used by [`encode`](crate::encode) and [`decode`](crate::decode).
#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
pub type DefaultStrategy = PreshiftedLookupTable;

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// Strategy Trait
// =============================================================================

/// An interleaving algorithm for every supported width/dimension pair.
///
/// This trait is sealed: the four strategies in this module are the only
/// implementors, so an unknown selector fails to compile.
///
/// The associated functions are the raw per-strategy entry points. They do not
/// check the bit budget: components wider than the budget wrap silently into
/// the high code bits. Use [`encode_with`](crate::encode_with) and
/// [`decode_with`](crate::decode_with) for the checked facade.
pub trait Strategy: sealed::Sealed + Copy + Default + 'static {
    /// Runtime identity of this strategy.
    const KIND: StrategyKind;

    /// 2D, 16-bit components -> 32-bit code.
    fn encode_2d_32(x: u16, y: u16) -> u32;

    /// 32-bit code -> 2D, 16-bit components.
    fn decode_2d_32(m: u32) -> (u16, u16);

    /// 2D, 32-bit components -> 64-bit code.
    fn encode_2d_64(x: u32, y: u32) -> u64;

    /// 64-bit code -> 2D, 32-bit components.
    fn decode_2d_64(m: u64) -> (u32, u32);

    /// 3D, 16-bit components -> 32-bit code.
    fn encode_3d_32(x: u16, y: u16, z: u16) -> u32;

    /// 32-bit code -> 3D, 16-bit components.
    fn decode_3d_32(m: u32) -> (u16, u16, u16);

    /// 3D, 32-bit components -> 64-bit code.
    fn encode_3d_64(x: u32, y: u32, z: u32) -> u64;

    /// 64-bit code -> 3D, 32-bit components.
    fn decode_3d_64(m: u64) -> (u32, u32, u32);
}

// =============================================================================
// Runtime Selector
// =============================================================================

/// Closed enumeration of the strategies compiled into this build.
///
/// Use it when the strategy is picked once from configuration; the hot path
/// still goes through the monomorphized [`Strategy`] implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// [`PreshiftedLookupTable`]
    PreshiftedLookupTable,
    /// [`LookupTable`]
    LookupTable,
    /// [`MagicBits`]
    MagicBits,
    /// `Bmi` (only with BMI2 enabled at compile time)
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    Bmi,
}

impl StrategyKind {
    /// Every strategy available in this build.
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    pub const ALL: &'static [StrategyKind] = &[
        StrategyKind::PreshiftedLookupTable,
        StrategyKind::LookupTable,
        StrategyKind::MagicBits,
        StrategyKind::Bmi,
    ];

    /// Every strategy available in this build.
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    pub const ALL: &'static [StrategyKind] = &[
        StrategyKind::PreshiftedLookupTable,
        StrategyKind::LookupTable,
        StrategyKind::MagicBits,
    ];

    /// The kind of [`DefaultStrategy`].
    pub const DEFAULT: StrategyKind = DefaultStrategy::KIND;

    /// Selector name, e.g. `"magic_bits"`.
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::PreshiftedLookupTable => "preshifted_lookup_table",
            StrategyKind::LookupTable => "lookup_table",
            StrategyKind::MagicBits => "magic_bits",
            #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
            StrategyKind::Bmi => "bmi",
        }
    }

    /// Encode with the strategy this kind names.
    #[inline]
    pub fn encode<C: Morton>(self, coordinates: C) -> MortonCode<C::Code> {
        match self {
            StrategyKind::PreshiftedLookupTable => encode_with(coordinates, PreshiftedLookupTable),
            StrategyKind::LookupTable => encode_with(coordinates, LookupTable),
            StrategyKind::MagicBits => encode_with(coordinates, MagicBits),
            #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
            StrategyKind::Bmi => encode_with(coordinates, Bmi),
        }
    }

    /// Decode with the strategy this kind names.
    #[inline]
    pub fn decode<C: Morton>(self, code: MortonCode<C::Code>) -> C {
        match self {
            StrategyKind::PreshiftedLookupTable => decode_with(code, PreshiftedLookupTable),
            StrategyKind::LookupTable => decode_with(code, LookupTable),
            StrategyKind::MagicBits => decode_with(code, MagicBits),
            #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
            StrategyKind::Bmi => decode_with(code, Bmi),
        }
    }
}

impl core::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
