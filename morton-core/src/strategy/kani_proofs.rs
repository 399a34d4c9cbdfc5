//! Kani formal verification proofs for the encoding strategies.
//!
//! Exhaustive over the bit budget of each width, which is out of reach for
//! the property tests on the 64-bit paths.
//!
//! Run with: `cargo kani --package morton-core`

use super::magic_bits::{
    compact_2d_32, compact_2d_64, compact_3d_32, compact_3d_64, spread_2d_32, spread_2d_64,
    spread_3d_32, spread_3d_64,
};
use super::{LookupTable, MagicBits, PreshiftedLookupTable, Strategy};

// ============================================================================
// Proof 1: 2D spread/compact are inverses
// ============================================================================
// File: magic_bits.rs
// What: compact(spread(x)) == x over the full component range

#[kani::proof]
fn verify_spread_compact_2d_32_inverse() {
    let x: u32 = kani::any();
    kani::assume(x <= 0xFFFF);

    kani::assert(compact_2d_32(spread_2d_32(x)) == x, "2D/32 spread then compact must return original");
}

#[kani::proof]
fn verify_spread_compact_2d_64_inverse() {
    let x: u64 = kani::any();
    kani::assume(x <= 0xFFFF_FFFF);

    kani::assert(compact_2d_64(spread_2d_64(x)) == x, "2D/64 spread then compact must return original");
}

// ============================================================================
// Proof 2: 3D spread/compact are inverses
// ============================================================================
// File: magic_bits.rs
// What: compact(spread(x)) == x for 11-bit (32) and 21-bit (64) components

#[kani::proof]
fn verify_spread_compact_3d_32_inverse() {
    let x: u32 = kani::any();
    kani::assume(x <= 0x7FF);

    kani::assert(compact_3d_32(spread_3d_32(x)) == x, "3D/32 spread then compact must return original");
}

#[kani::proof]
fn verify_spread_compact_3d_64_inverse() {
    let x: u64 = kani::any();
    kani::assume(x <= 0x1F_FFFF);

    kani::assert(compact_3d_64(spread_3d_64(x)) == x, "3D/64 spread then compact must return original");
}

// ============================================================================
// Proof 3: spread lands only on dimension-0 positions
// ============================================================================
// What: No spread bit leaks into another dimension's slot

#[kani::proof]
fn verify_spread_stays_in_lane() {
    let x: u32 = kani::any();
    let wide: u64 = kani::any();

    kani::assert(spread_2d_32(x) & !0x5555_5555 == 0, "2D/32 spread must stay on even bits");
    kani::assert(spread_3d_32(x) & !0x4924_9249 == 0, "3D/32 spread must stay on every third bit");
    kani::assert(
        spread_3d_64(wide) & !0x1249_2492_4924_9249 == 0,
        "3D/64 spread must stay on every third bit",
    );
}

// ============================================================================
// Proof 4: table strategies agree with magic bits
// ============================================================================
// File: preshifted.rs, lookup.rs
// What: Both table strategies produce the magic-bits code for every 2D/32 input

#[kani::proof]
#[kani::unwind(5)]
fn verify_tables_match_magic_bits_2d_32() {
    let x: u16 = kani::any();
    let y: u16 = kani::any();

    let expected = MagicBits::encode_2d_32(x, y);
    kani::assert(
        PreshiftedLookupTable::encode_2d_32(x, y) == expected,
        "pre-shifted table encode must match magic bits",
    );
    kani::assert(
        LookupTable::encode_2d_32(x, y) == expected,
        "lookup table encode must match magic bits",
    );
}

#[kani::proof]
#[kani::unwind(5)]
fn verify_lookup_decode_matches_magic_bits_3d_32() {
    let m: u32 = kani::any();

    kani::assert(
        LookupTable::decode_3d_32(m) == MagicBits::decode_3d_32(m),
        "lookup table decode must match magic bits",
    );
}
