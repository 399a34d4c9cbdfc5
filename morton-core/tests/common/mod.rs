//! Shared fixtures for morton-core tests.
//!
//! Known Z-order layouts and regression values that every strategy must
//! reproduce exactly.

#![allow(dead_code)] // Not all test files use all fixtures

/// 2D codes for x, y in 0..8, indexed `[y][x]`.
pub const Z_ORDER_8X8: [[u32; 8]; 8] = [
    [0, 1, 4, 5, 16, 17, 20, 21],
    [2, 3, 6, 7, 18, 19, 22, 23],
    [8, 9, 12, 13, 24, 25, 28, 29],
    [10, 11, 14, 15, 26, 27, 30, 31],
    [32, 33, 36, 37, 48, 49, 52, 53],
    [34, 35, 38, 39, 50, 51, 54, 55],
    [40, 41, 44, 45, 56, 57, 60, 61],
    [42, 43, 46, 47, 58, 59, 62, 63],
];

/// 3D code for x, y, z in 0..4.
///
/// Built from the interleaving rule directly: bit `k` of dimension `d` lands
/// on code bit `3k + d`.
pub fn z_order_4x4x4(x: u32, y: u32, z: u32) -> u32 {
    let mut code = 0;
    for k in 0..2 {
        code |= ((x >> k) & 1) << (3 * k);
        code |= ((y >> k) & 1) << (3 * k + 1);
        code |= ((z >> k) & 1) << (3 * k + 2);
    }
    code
}

/// Hand-checked rows of the 3D layout at z = 0, indexed `[y][x]`.
pub const Z_ORDER_4X4_Z0: [[u32; 4]; 4] = [
    [0, 1, 8, 9],
    [2, 3, 10, 11],
    [16, 17, 24, 25],
    [18, 19, 26, 27],
];

/// Components whose 32-bit 3D code and 64-bit 3D code are both 4293967295.
///
/// x and y use 11 bits, past the 10-bit budget of the checked 32-bit facade.
pub const REGRESSION_3D: (u16, u16, u16) = (1971, 1951, 975);
pub const REGRESSION_3D_CODE: u32 = 4_293_967_295;

/// A 64-bit 3D code right below 2^63 and its components.
pub const REGRESSION_3D_64: (u32, u32, u32) = (2_097_075, 2_097_055, 2_097_103);
pub const REGRESSION_3D_64_CODE: u64 = 9_223_372_036_853_775_807;

/// Largest components inside the 3D bit budget.
pub const MAX_3D_32: u16 = (1 << 10) - 1;
pub const MAX_3D_64: u32 = (1 << 21) - 1;

/// Reference interleave over arbitrary widths, one bit at a time.
pub fn interleave_naive(components: &[u64], code_bits: u32) -> u64 {
    let n = components.len() as u32;
    let mut code = 0u64;
    for bit in 0..code_bits {
        let (k, d) = (bit / n, (bit % n) as usize);
        code |= ((components[d] >> k) & 1) << bit;
    }
    code
}
