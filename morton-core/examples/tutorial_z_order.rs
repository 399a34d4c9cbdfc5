//! # Tutorial: Walking a Grid in Z-Order
//!
//! This example encodes every cell of a small 2D grid and a 3D cube, prints
//! the Morton code of each cell, and then walks the codes in numeric order to
//! show the Z-shaped traversal.
//!
//! ## What You'll Learn
//!
//! 1. **Encoding**: How `encode` interleaves coordinate bits into one code
//! 2. **Decoding**: How the coordinate type picks the dimensionality
//! 3. **Strategies**: How to pick an algorithm explicitly or at runtime
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_z_order
//! RUSTFLAGS="-C target-feature=+bmi2" cargo run --example tutorial_z_order
//! ```

use morton_core::{
    decode, encode, encode_with, Coordinates2D16, Coordinates3D16, MagicBits, MortonCode,
    StrategyKind, HAS_BMI2,
};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Side length of the 2D grid.
const SIDE_2D: u16 = 8;
/// Side length of the 3D cube.
const SIDE_3D: u16 = 4;

fn main() {
    println!("Default strategy: {} (bmi2 compiled in: {})", StrategyKind::DEFAULT, HAS_BMI2);
    println!();

    // =========================================================================
    // Step 1: Encode every cell of an 8x8 grid
    // =========================================================================
    println!("Morton codes of an {0}x{0} grid (rows are y, columns are x):", SIDE_2D);
    for y in 0..SIDE_2D {
        let row: Vec<String> = (0..SIDE_2D)
            .map(|x| format!("{:>3}", encode(Coordinates2D16::new(x, y))))
            .collect();
        println!("  {}", row.join(" "));
    }
    println!();

    // =========================================================================
    // Step 2: Walk the codes in order
    // =========================================================================
    // Each group of four codes is a 2x2 block; each group of sixteen is a
    // 4x4 block made of four such blocks, and so on.
    let path: Vec<String> = (0..16u32)
        .map(|code| decode::<Coordinates2D16>(MortonCode(code)).to_string())
        .collect();
    println!("First 16 cells in Z-order: {}", path.join(" -> "));
    println!();

    // =========================================================================
    // Step 3: The same code read back as 3D
    // =========================================================================
    let code = MortonCode(63u32);
    let flat: Coordinates2D16 = decode(code);
    let cube: Coordinates3D16 = decode(code);
    println!("Code {} is {} in 2D and {} in 3D", code, flat, cube);

    let corner = Coordinates3D16::new(SIDE_3D - 1, SIDE_3D - 1, SIDE_3D - 1);
    println!("Far corner of the {0}x{0}x{0} cube {1} encodes to {2}", SIDE_3D, corner, encode(corner));
    println!();

    // =========================================================================
    // Step 4: Choosing a strategy
    // =========================================================================
    // Compile-time choice: pass a marker type.
    let p = Coordinates3D16::new(1023, 0, 1023);
    println!("{} with magic_bits: {}", p, encode_with(p, MagicBits));

    // Runtime choice: every strategy in this build gives the same code.
    for &kind in StrategyKind::ALL {
        println!("{} with {}: {}", p, kind, kind.encode(p));
    }
}
