// =============================================================================
// Magic Bits Strategy (SWAR spread/compact)
// =============================================================================
//
// Bit spreading by repeated shift-OR-mask. Each step doubles the distance
// between bit groups until every component bit sits `N` positions apart.
// Compaction runs the same masks in reverse order with right shifts.
//
// The spread functions keep only the bit budget of their width: 16/32 bits for
// 2D, 11/21 bits for 3D (32/64-bit codes). Compaction reads exactly the
// dimension-0 positions of a code, so `compact(m >> d)` yields dimension `d`.

use super::{sealed, Strategy, StrategyKind};

/// Encoding by mask/shift bit spreading. Portable, no tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MagicBits;

impl sealed::Sealed for MagicBits {}

// =============================================================================
// 2D
// =============================================================================

/// Spread the lower 16 bits of `x` into the even bit positions.
#[inline(always)]
pub fn spread_2d_32(x: u32) -> u32 {
    let mut x = x & 0x0000FFFF;
    x = (x | (x << 8)) & 0x00FF00FF;
    x = (x | (x << 4)) & 0x0F0F0F0F;
    x = (x | (x << 2)) & 0x33333333;
    x = (x | (x << 1)) & 0x55555555;
    x
}

/// Compact the even bit positions of `m` into the lower 16 bits.
#[inline(always)]
pub fn compact_2d_32(m: u32) -> u32 {
    let mut x = m & 0x55555555;
    x = (x | (x >> 1)) & 0x33333333;
    x = (x | (x >> 2)) & 0x0F0F0F0F;
    x = (x | (x >> 4)) & 0x00FF00FF;
    x = (x | (x >> 8)) & 0x0000FFFF;
    x
}

/// Spread the lower 32 bits of `x` into the even bit positions.
#[inline(always)]
pub fn spread_2d_64(x: u64) -> u64 {
    let mut x = x & 0x0000_0000_FFFF_FFFF;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Compact the even bit positions of `m` into the lower 32 bits.
#[inline(always)]
pub fn compact_2d_64(m: u64) -> u64 {
    let mut x = m & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x
}

// =============================================================================
// 3D
// =============================================================================

/// Spread the lower 11 bits of `x` into every third bit position.
///
/// Bit 10 lands on bit 30, the last slot a 32-bit code has for dimension 0.
#[inline(always)]
pub fn spread_3d_32(x: u32) -> u32 {
    let mut x = x & 0x0000_0FFF;
    x = (x | (x << 16)) & 0xFF00_00FF;
    x = (x | (x << 8)) & 0x0F00_F00F;
    x = (x | (x << 4)) & 0xC30C_30C3;
    x = (x | (x << 2)) & 0x4924_9249;
    x
}

/// Compact every third bit position of `m` into the lower 11 bits.
#[inline(always)]
pub fn compact_3d_32(m: u32) -> u32 {
    let mut x = m & 0x4924_9249;
    x = (x | (x >> 2)) & 0xC30C_30C3;
    x = (x | (x >> 4)) & 0x0F00_F00F;
    x = (x | (x >> 8)) & 0xFF00_00FF;
    x = (x | (x >> 16)) & 0x0000_0FFF;
    x
}

/// Spread the lower 21 bits of `x` into every third bit position.
#[inline(always)]
pub fn spread_3d_64(x: u64) -> u64 {
    let mut x = x & 0x1F_FFFF;
    x = (x | (x << 32)) & 0x001F_0000_0000_FFFF;
    x = (x | (x << 16)) & 0x001F_0000_FF00_00FF;
    x = (x | (x << 8)) & 0x100F_00F0_0F00_F00F;
    x = (x | (x << 4)) & 0x10C3_0C30_C30C_30C3;
    x = (x | (x << 2)) & 0x1249_2492_4924_9249;
    x
}

/// Compact every third bit position of `m` into the lower 21 bits.
#[inline(always)]
pub fn compact_3d_64(m: u64) -> u64 {
    let mut x = m & 0x1249_2492_4924_9249;
    x = (x | (x >> 2)) & 0x10C3_0C30_C30C_30C3;
    x = (x | (x >> 4)) & 0x100F_00F0_0F00_F00F;
    x = (x | (x >> 8)) & 0x001F_0000_FF00_00FF;
    x = (x | (x >> 16)) & 0x001F_0000_0000_FFFF;
    x = (x | (x >> 32)) & 0x1F_FFFF;
    x
}

// =============================================================================
// Strategy
// =============================================================================

impl Strategy for MagicBits {
    const KIND: StrategyKind = StrategyKind::MagicBits;

    #[inline(always)]
    fn encode_2d_32(x: u16, y: u16) -> u32 {
        spread_2d_32(x as u32) | (spread_2d_32(y as u32) << 1)
    }

    #[inline(always)]
    fn decode_2d_32(m: u32) -> (u16, u16) {
        (compact_2d_32(m) as u16, compact_2d_32(m >> 1) as u16)
    }

    #[inline(always)]
    fn encode_2d_64(x: u32, y: u32) -> u64 {
        spread_2d_64(x as u64) | (spread_2d_64(y as u64) << 1)
    }

    #[inline(always)]
    fn decode_2d_64(m: u64) -> (u32, u32) {
        (compact_2d_64(m) as u32, compact_2d_64(m >> 1) as u32)
    }

    #[inline(always)]
    fn encode_3d_32(x: u16, y: u16, z: u16) -> u32 {
        spread_3d_32(x as u32) | (spread_3d_32(y as u32) << 1) | (spread_3d_32(z as u32) << 2)
    }

    #[inline(always)]
    fn decode_3d_32(m: u32) -> (u16, u16, u16) {
        (
            compact_3d_32(m) as u16,
            compact_3d_32(m >> 1) as u16,
            compact_3d_32(m >> 2) as u16,
        )
    }

    #[inline(always)]
    fn encode_3d_64(x: u32, y: u32, z: u32) -> u64 {
        spread_3d_64(x as u64) | (spread_3d_64(y as u64) << 1) | (spread_3d_64(z as u64) << 2)
    }

    #[inline(always)]
    fn decode_3d_64(m: u64) -> (u32, u32, u32) {
        (
            compact_3d_64(m) as u32,
            compact_3d_64(m >> 1) as u32,
            compact_3d_64(m >> 2) as u32,
        )
    }
}
