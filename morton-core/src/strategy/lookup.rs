// =============================================================================
// Lookup Table Strategy
// =============================================================================
//
// Same byte-group walk as the pre-shifted strategy, but only the X tables are
// consulted. Encode shifts each looked-up entry left by the dimension index;
// decode starts its window `start_shift` bits higher (0, 1 or 2) so the X
// gather table picks up the bit-plane of dimension `start_shift` instead.
//
// The reuse is sound because interleaving is translation invariant: code bit
// `k * N + d` is X-plane bit `k * N` of the code shifted right by `d`.

use super::preshifted::{byte_at, WINDOWS_3D_32, WINDOWS_3D_64};
use super::{sealed, Strategy, StrategyKind};
use crate::tables::{DECODE_2D_X, DECODE_3D_X, ENCODE_2D_X, ENCODE_3D_X};

/// Encoding with a single byte table per dimensionality plus run-time shifts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LookupTable;

impl sealed::Sealed for LookupTable {}

/// Gather dimension `start_shift` of a 2D 32-bit code.
#[inline(always)]
fn decode_2d_32(m: u32, start_shift: u32) -> u16 {
    let mut c = 0u32;
    for i in 0..u32::BITS / 8 {
        let shift = i * 8 + start_shift;
        c |= (DECODE_2D_X[((m >> shift) & 0xFF) as usize] as u32) << (4 * i);
    }
    c as u16
}

/// Gather dimension `start_shift` of a 2D 64-bit code.
#[inline(always)]
fn decode_2d_64(m: u64, start_shift: u32) -> u32 {
    let mut c = 0u32;
    for i in 0..u64::BITS / 8 {
        let shift = i * 8 + start_shift;
        c |= (DECODE_2D_X[((m >> shift) & 0xFF) as usize] as u32) << (4 * i);
    }
    c
}

/// Gather dimension `start_shift` of a 3D 32-bit code.
#[inline(always)]
fn decode_3d_32(m: u32, start_shift: u32) -> u16 {
    let mut c = 0u32;
    for i in 0..WINDOWS_3D_32 {
        let shift = i * 9 + start_shift;
        c |= (DECODE_3D_X[((m >> shift) & 0x1FF) as usize] as u32) << (3 * i);
    }
    c as u16
}

/// Gather dimension `start_shift` of a 3D 64-bit code.
#[inline(always)]
fn decode_3d_64(m: u64, start_shift: u32) -> u32 {
    let mut c = 0u32;
    for i in 0..WINDOWS_3D_64 {
        let shift = i * 9 + start_shift;
        c |= (DECODE_3D_X[((m >> shift) & 0x1FF) as usize] as u32) << (3 * i);
    }
    c
}

impl Strategy for LookupTable {
    const KIND: StrategyKind = StrategyKind::LookupTable;

    #[inline(always)]
    fn encode_2d_32(x: u16, y: u16) -> u32 {
        let (x, y) = (x as u32, y as u32);
        let mut code = 0u32;
        for shift in [8, 0] {
            code = code << 16
                | (ENCODE_2D_X[byte_at(y, shift)] as u32) << 1
                | ENCODE_2D_X[byte_at(x, shift)] as u32;
        }
        code
    }

    #[inline(always)]
    fn decode_2d_32(m: u32) -> (u16, u16) {
        (decode_2d_32(m, 0), decode_2d_32(m, 1))
    }

    #[inline(always)]
    fn encode_2d_64(x: u32, y: u32) -> u64 {
        let mut code = 0u64;
        for shift in [24, 16, 8, 0] {
            code = code << 16
                | (ENCODE_2D_X[byte_at(y, shift)] as u64) << 1
                | ENCODE_2D_X[byte_at(x, shift)] as u64;
        }
        code
    }

    #[inline(always)]
    fn decode_2d_64(m: u64) -> (u32, u32) {
        (decode_2d_64(m, 0), decode_2d_64(m, 1))
    }

    #[inline(always)]
    fn encode_3d_32(x: u16, y: u16, z: u16) -> u32 {
        let (x, y, z) = (x as u32, y as u32, z as u32);
        let mut code = 0u32;
        for shift in [8, 0] {
            code = code << 24
                | ENCODE_3D_X[byte_at(z, shift)] << 2
                | ENCODE_3D_X[byte_at(y, shift)] << 1
                | ENCODE_3D_X[byte_at(x, shift)];
        }
        code
    }

    #[inline(always)]
    fn decode_3d_32(m: u32) -> (u16, u16, u16) {
        (decode_3d_32(m, 0), decode_3d_32(m, 1), decode_3d_32(m, 2))
    }

    #[inline(always)]
    fn encode_3d_64(x: u32, y: u32, z: u32) -> u64 {
        let mut code = 0u64;
        for shift in [24, 16, 8, 0] {
            code = code << 24
                | (ENCODE_3D_X[byte_at(z, shift)] as u64) << 2
                | (ENCODE_3D_X[byte_at(y, shift)] as u64) << 1
                | ENCODE_3D_X[byte_at(x, shift)] as u64;
        }
        code
    }

    #[inline(always)]
    fn decode_3d_64(m: u64) -> (u32, u32, u32) {
        (decode_3d_64(m, 0), decode_3d_64(m, 1), decode_3d_64(m, 2))
    }
}
