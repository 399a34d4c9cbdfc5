// =============================================================================
// Pre-shifted Lookup Table Strategy
// =============================================================================
//
// Encode walks the coordinate bytes from most to least significant. Each byte
// of each dimension is looked up in that dimension's table, whose entries are
// already spread AND shifted into the dimension slot, so one OR per dimension
// builds a byte group of the code. The running code moves up by `N * 8` bits
// before the next, lower group is inserted.
//
// Decode walks code windows from least significant up: 8-bit windows carry
// one nibble per 2D dimension, 9-bit windows one triple per 3D dimension.

use super::{sealed, Strategy, StrategyKind};
use crate::tables::{
    DECODE_2D_X, DECODE_2D_Y, DECODE_3D_X, DECODE_3D_Y, DECODE_3D_Z, ENCODE_2D_X, ENCODE_2D_Y,
    ENCODE_3D_X, ENCODE_3D_Y, ENCODE_3D_Z,
};

/// Encoding with per-dimension, pre-shifted byte tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PreshiftedLookupTable;

impl sealed::Sealed for PreshiftedLookupTable {}

/// Byte of `v` starting at bit `shift`, as a table index.
#[inline(always)]
pub(crate) fn byte_at(v: u32, shift: u32) -> usize {
    ((v >> shift) & 0xFF) as usize
}

/// Windows per 3D code: ceil(32 / 9) for 32-bit codes, floor(64 / 9) for 64-bit.
pub(crate) const WINDOWS_3D_32: u32 = 4;
pub(crate) const WINDOWS_3D_64: u32 = 7;

#[inline(always)]
fn decode_2d_32(m: u32, table: &[u8; 256]) -> u16 {
    let mut c = 0u32;
    for i in 0..u32::BITS / 8 {
        c |= (table[((m >> (i * 8)) & 0xFF) as usize] as u32) << (4 * i);
    }
    c as u16
}

#[inline(always)]
fn decode_2d_64(m: u64, table: &[u8; 256]) -> u32 {
    let mut c = 0u32;
    for i in 0..u64::BITS / 8 {
        c |= (table[((m >> (i * 8)) & 0xFF) as usize] as u32) << (4 * i);
    }
    c
}

#[inline(always)]
fn decode_3d_32(m: u32, table: &[u8; 512]) -> u16 {
    let mut c = 0u32;
    for i in 0..WINDOWS_3D_32 {
        c |= (table[((m >> (i * 9)) & 0x1FF) as usize] as u32) << (3 * i);
    }
    c as u16
}

#[inline(always)]
fn decode_3d_64(m: u64, table: &[u8; 512]) -> u32 {
    let mut c = 0u32;
    for i in 0..WINDOWS_3D_64 {
        c |= (table[((m >> (i * 9)) & 0x1FF) as usize] as u32) << (3 * i);
    }
    c
}

impl Strategy for PreshiftedLookupTable {
    const KIND: StrategyKind = StrategyKind::PreshiftedLookupTable;

    #[inline(always)]
    fn encode_2d_32(x: u16, y: u16) -> u32 {
        let (x, y) = (x as u32, y as u32);
        let mut code = 0u32;
        for shift in [8, 0] {
            code = code << 16
                | ENCODE_2D_Y[byte_at(y, shift)] as u32
                | ENCODE_2D_X[byte_at(x, shift)] as u32;
        }
        code
    }

    #[inline(always)]
    fn decode_2d_32(m: u32) -> (u16, u16) {
        (decode_2d_32(m, &DECODE_2D_X), decode_2d_32(m, &DECODE_2D_Y))
    }

    #[inline(always)]
    fn encode_2d_64(x: u32, y: u32) -> u64 {
        let mut code = 0u64;
        for shift in [24, 16, 8, 0] {
            code = code << 16
                | ENCODE_2D_Y[byte_at(y, shift)] as u64
                | ENCODE_2D_X[byte_at(x, shift)] as u64;
        }
        code
    }

    #[inline(always)]
    fn decode_2d_64(m: u64) -> (u32, u32) {
        (decode_2d_64(m, &DECODE_2D_X), decode_2d_64(m, &DECODE_2D_Y))
    }

    #[inline(always)]
    fn encode_3d_32(x: u16, y: u16, z: u16) -> u32 {
        let (x, y, z) = (x as u32, y as u32, z as u32);
        let mut code = 0u32;
        for shift in [8, 0] {
            code = code << 24
                | ENCODE_3D_Z[byte_at(z, shift)]
                | ENCODE_3D_Y[byte_at(y, shift)]
                | ENCODE_3D_X[byte_at(x, shift)];
        }
        code
    }

    #[inline(always)]
    fn decode_3d_32(m: u32) -> (u16, u16, u16) {
        (
            decode_3d_32(m, &DECODE_3D_X),
            decode_3d_32(m, &DECODE_3D_Y),
            decode_3d_32(m, &DECODE_3D_Z),
        )
    }

    #[inline(always)]
    fn encode_3d_64(x: u32, y: u32, z: u32) -> u64 {
        let mut code = 0u64;
        for shift in [24, 16, 8, 0] {
            // The top group overflows out of the code; it is zero inside the budget.
            code = code << 24
                | ENCODE_3D_Z[byte_at(z, shift)] as u64
                | ENCODE_3D_Y[byte_at(y, shift)] as u64
                | ENCODE_3D_X[byte_at(x, shift)] as u64;
        }
        code
    }

    #[inline(always)]
    fn decode_3d_64(m: u64) -> (u32, u32, u32) {
        (
            decode_3d_64(m, &DECODE_3D_X),
            decode_3d_64(m, &DECODE_3D_Y),
            decode_3d_64(m, &DECODE_3D_Z),
        )
    }
}
