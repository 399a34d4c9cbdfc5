// =============================================================================
// Lookup Tables
// =============================================================================
//
// Byte-granular spread (encode) and gather (decode) tables used by the
// pre-shifted and plain lookup-table strategies. Every table is evaluated at
// compile time from the bit-spread definition below and stored as an
// immutable `static`; nothing here is ever written at runtime.
//
// Encode tables map one coordinate byte to its interleaved contribution.
// Decode tables map a window of code bits to the coordinate bits of one
// dimension found in that window: 8-bit windows for 2D, 9-bit windows for 3D
// (three-way interleaving does not line up with byte boundaries).

// =============================================================================
// Generators
// =============================================================================

/// Spread the 8 bits of `value` so that bit `k` lands on bit `k * stride`.
///
/// `spread_byte(0b1011, 2) == 0b01_00_01_01`.
pub const fn spread_byte(value: u8, stride: u32) -> u32 {
    let mut spread = 0u32;
    let mut bit = 0;
    while bit < u8::BITS {
        spread |= (((value >> bit) & 1) as u32) << (bit * stride);
        bit += 1;
    }
    spread
}

/// Collect the bits of a `width`-bit `window` found at positions
/// `offset, offset + stride, offset + 2 * stride, ...` into a contiguous value.
///
/// This is the inverse of [`spread_byte`] restricted to one window.
pub const fn gather_window(window: u32, offset: u32, stride: u32, width: u32) -> u8 {
    let mut gathered = 0u8;
    let mut k = 0;
    while offset + k * stride < width {
        gathered |= (((window >> (offset + k * stride)) & 1) as u8) << k;
        k += 1;
    }
    gathered
}

const fn encode_2d_table(offset: u32) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = (spread_byte(i as u8, 2) << offset) as u16;
        i += 1;
    }
    table
}

const fn encode_3d_table(offset: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = spread_byte(i as u8, 3) << offset;
        i += 1;
    }
    table
}

const fn decode_table<const LEN: usize>(stride: u32, offset: u32) -> [u8; LEN] {
    let width = LEN.trailing_zeros();
    let mut table = [0u8; LEN];
    let mut i = 0;
    while i < LEN {
        table[i] = gather_window(i as u32, offset, stride, width);
        i += 1;
    }
    table
}

// =============================================================================
// 2D Tables
// =============================================================================

/// Byte -> X contribution (even bits of a 16-bit group).
pub static ENCODE_2D_X: [u16; 256] = encode_2d_table(0);

/// Byte -> Y contribution (odd bits of a 16-bit group), i.e. `ENCODE_2D_X << 1`.
pub static ENCODE_2D_Y: [u16; 256] = encode_2d_table(1);

/// 8-bit code window -> X nibble (even window bits).
pub static DECODE_2D_X: [u8; 256] = decode_table::<256>(2, 0);

/// 8-bit code window -> Y nibble (odd window bits).
pub static DECODE_2D_Y: [u8; 256] = decode_table::<256>(2, 1);

// =============================================================================
// 3D Tables
// =============================================================================

/// Byte -> X contribution (bits `3k` of a 24-bit group).
pub static ENCODE_3D_X: [u32; 256] = encode_3d_table(0);

/// Byte -> Y contribution (bits `3k + 1`), i.e. `ENCODE_3D_X << 1`.
pub static ENCODE_3D_Y: [u32; 256] = encode_3d_table(1);

/// Byte -> Z contribution (bits `3k + 2`), i.e. `ENCODE_3D_X << 2`.
pub static ENCODE_3D_Z: [u32; 256] = encode_3d_table(2);

/// 9-bit code window -> X triple (window bits 0, 3, 6).
pub static DECODE_3D_X: [u8; 512] = decode_table::<512>(3, 0);

/// 9-bit code window -> Y triple (window bits 1, 4, 7).
pub static DECODE_3D_Y: [u8; 512] = decode_table::<512>(3, 1);

/// 9-bit code window -> Z triple (window bits 2, 5, 8).
pub static DECODE_3D_Z: [u8; 512] = decode_table::<512>(3, 2);
