// =============================================================================
// BMI2 Strategy (PDEP/PEXT)
// =============================================================================
//
// `pdep` deposits the low bits of a component into the set positions of a
// mask; `pext` gathers them back. One instruction per component.
//
// Only compiled for x86_64 targets built with `-C target-feature=+bmi2`, so the
// intrinsics are always supported where this code runs.

use core::arch::x86_64::{_pdep_u32, _pdep_u64, _pext_u32, _pext_u64};

use super::{sealed, Strategy, StrategyKind};

/// Encoding with the BMI2 `pdep`/`pext` instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bmi;

impl sealed::Sealed for Bmi {}

const MASK_2D_32_X: u32 = 0x5555_5555;
const MASK_2D_32_Y: u32 = 0xAAAA_AAAA;

const MASK_2D_64_X: u64 = 0x5555_5555_5555_5555;
const MASK_2D_64_Y: u64 = 0xAAAA_AAAA_AAAA_AAAA;

const MASK_3D_32_X: u32 = 0x4924_9249;
const MASK_3D_32_Y: u32 = 0x9249_2492;
const MASK_3D_32_Z: u32 = 0x2492_4924;

// Dimension 0 gets 22 slots here (bit 63 included); the bit budget stays 21.
const MASK_3D_64_X: u64 = 0x9249_2492_4924_9249;
const MASK_3D_64_Y: u64 = 0x2492_4924_9249_2492;
const MASK_3D_64_Z: u64 = 0x4924_9249_2492_4924;

impl Strategy for Bmi {
    const KIND: StrategyKind = StrategyKind::Bmi;

    #[inline(always)]
    fn encode_2d_32(x: u16, y: u16) -> u32 {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe { _pdep_u32(x as u32, MASK_2D_32_X) | _pdep_u32(y as u32, MASK_2D_32_Y) }
    }

    #[inline(always)]
    fn decode_2d_32(m: u32) -> (u16, u16) {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe {
            (
                _pext_u32(m, MASK_2D_32_X) as u16,
                _pext_u32(m, MASK_2D_32_Y) as u16,
            )
        }
    }

    #[inline(always)]
    fn encode_2d_64(x: u32, y: u32) -> u64 {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe { _pdep_u64(x as u64, MASK_2D_64_X) | _pdep_u64(y as u64, MASK_2D_64_Y) }
    }

    #[inline(always)]
    fn decode_2d_64(m: u64) -> (u32, u32) {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe {
            (
                _pext_u64(m, MASK_2D_64_X) as u32,
                _pext_u64(m, MASK_2D_64_Y) as u32,
            )
        }
    }

    #[inline(always)]
    fn encode_3d_32(x: u16, y: u16, z: u16) -> u32 {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe {
            _pdep_u32(x as u32, MASK_3D_32_X)
                | _pdep_u32(y as u32, MASK_3D_32_Y)
                | _pdep_u32(z as u32, MASK_3D_32_Z)
        }
    }

    #[inline(always)]
    fn decode_3d_32(m: u32) -> (u16, u16, u16) {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe {
            (
                _pext_u32(m, MASK_3D_32_X) as u16,
                _pext_u32(m, MASK_3D_32_Y) as u16,
                _pext_u32(m, MASK_3D_32_Z) as u16,
            )
        }
    }

    #[inline(always)]
    fn encode_3d_64(x: u32, y: u32, z: u32) -> u64 {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe {
            _pdep_u64(x as u64, MASK_3D_64_X)
                | _pdep_u64(y as u64, MASK_3D_64_Y)
                | _pdep_u64(z as u64, MASK_3D_64_Z)
        }
    }

    #[inline(always)]
    fn decode_3d_64(m: u64) -> (u32, u32, u32) {
        // SAFETY: bmi2 is enabled at compile time for this module.
        unsafe {
            (
                _pext_u64(m, MASK_3D_64_X) as u32,
                _pext_u64(m, MASK_3D_64_Y) as u32,
                _pext_u64(m, MASK_3D_64_Z) as u32,
            )
        }
    }
}
