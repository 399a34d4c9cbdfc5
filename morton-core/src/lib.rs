//! # morton-core: Morton (Z-order) Encoding for 2D and 3D Coordinates
//!
//! `morton-core` is a `no_std`, zero-allocation library that maps integer
//! coordinates onto a single Morton code by interleaving their bits, and back.
//! Bit `k` of dimension `d` lands on bit `k * N + d` of the code, so points
//! that are close in space tend to get numerically close codes.
//!
//! ## Overview
//!
//! Two code widths are supported for both dimensionalities:
//!
//! | coordinates | code | 2D bits / component | 3D bits / component |
//! |-------------|------|---------------------|---------------------|
//! | `u16`       | `u32`| 16                  | 10                  |
//! | `u32`       | `u64`| 32                  | 21                  |
//!
//! Every width/dimension pair is implemented by four interchangeable
//! strategies that produce bit-identical codes:
//!
//! 1. **Pre-shifted lookup tables** - one table per dimension, entries already
//!    shifted into their dimension slot
//! 2. **Lookup table** - a single base table plus a shift per dimension
//! 3. **Magic bits** - mask/shift bit spreading, no memory traffic at all
//! 4. **BMI2** - `pdep`/`pext`, only compiled on `x86_64` with `bmi2` enabled
//!
//! ## Quick Start
//!
//! ```
//! use morton_core::{decode, encode, encode_with, Coordinates2D, Coordinates3D, MagicBits, MortonCode};
//!
//! let code = encode(Coordinates2D::<u16>::new(3, 3));
//! assert_eq!(code, MortonCode(15u32));
//!
//! let code = encode_with(Coordinates3D::<u32>::new(1, 0, 1), MagicBits);
//! assert_eq!(code.value(), 5u64);
//!
//! let back: Coordinates3D<u32> = decode(code);
//! assert_eq!(back, Coordinates3D::new(1, 0, 1));
//! ```
//!
//! ## Strategy Selection
//!
//! Strategies are zero-sized marker types implementing the sealed [`Strategy`]
//! trait, so choosing one is a compile-time decision with no runtime dispatch.
//! [`DefaultStrategy`] is `Bmi` when the crate is built with
//! `-C target-feature=+bmi2`, and [`PreshiftedLookupTable`] otherwise.
//! [`StrategyKind`] offers the same closed set as a plain enum for callers that
//! pick a strategy once from configuration.
//!
//! ## Module Organization
//!
//! - [`types`] - Coordinate and code value types
//! - [`tables`] - Compile-time generated lookup tables
//! - [`strategy`] - The four encoding strategies and their selector types
//! - [`codec`] - The `encode`/`decode` facade with debug-build bound checks

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Coordinate and Morton code value types.
pub mod types;

/// Byte-wise spread/gather lookup tables shared by the table strategies.
pub mod tables;

/// Encoding strategies: pre-shifted tables, lookup table, magic bits, BMI2.
pub mod strategy;

/// Public encode/decode entry points.
pub mod codec;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Value types
pub use types::{
    Coordinates2D, Coordinates2D16, Coordinates2D32, Coordinates3D, Coordinates3D16,
    Coordinates3D32, MortonCode, MortonCode32, MortonCode64, ParseError,
};

// Strategies
pub use strategy::{
    DefaultStrategy, LookupTable, MagicBits, PreshiftedLookupTable, Strategy, StrategyKind,
    HAS_BMI2,
};

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
pub use strategy::Bmi;

// Facade
pub use codec::{decode, decode_with, encode, encode_with, Morton};
