use std::cmp::max;
use std::hint::black_box;

use anyhow::{bail, Result};
use morton_core::{
    decode_with, encode_with, Coordinates2D, Coordinates3D, LookupTable, MagicBits, MortonCode,
    PreshiftedLookupTable, Strategy, StrategyKind,
};

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
use morton_core::Bmi;

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

use crate::platforms::{BenchmarkHost, Platform};

/// Command-line selector for the strategy under test.
#[derive(Copy, Clone, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum StrategyArg {
    PreshiftedLookupTable,
    LookupTable,
    MagicBits,
    Bmi,
    All,
}

/// Command-line selector for the dimensionality.
#[derive(Copy, Clone, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum DimsArg {
    #[value(name = "2d")]
    Two,
    #[value(name = "3d")]
    Three,
    All,
}

/// Command-line selector for the code width.
#[derive(Copy, Clone, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum WidthArg {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    All,
}

/// One dimensionality/width pair.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Layout {
    D2W32,
    D2W64,
    D3W32,
    D3W64,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::D2W32 => "2D/32",
            Layout::D2W64 => "2D/64",
            Layout::D3W32 => "3D/32",
            Layout::D3W64 => "3D/64",
        }
    }

    /// Component mask for generated inputs: the bit budget of the pair.
    fn component_mask(self) -> u32 {
        match self {
            Layout::D2W32 => u16::MAX as u32,
            Layout::D2W64 => u32::MAX,
            Layout::D3W32 => (1 << 10) - 1,
            Layout::D3W64 => (1 << 21) - 1,
        }
    }

    fn dims(self) -> usize {
        match self {
            Layout::D2W32 | Layout::D2W64 => 2,
            Layout::D3W32 | Layout::D3W64 => 3,
        }
    }
}

/// Resolved suite configuration.
pub struct SuiteConfig {
    pub strategies: Vec<StrategyKind>,
    pub layouts: Vec<Layout>,
    pub count: usize,
    pub rounds: usize,
    pub seed: u64,
}

impl SuiteConfig {
    pub fn new(
        strategy: StrategyArg,
        dims: DimsArg,
        width: WidthArg,
        count: usize,
        rounds: usize,
        seed: u64,
    ) -> Result<Self> {
        if count == 0 || rounds == 0 {
            bail!("--count and --rounds must be at least 1");
        }

        let strategies = match strategy {
            StrategyArg::PreshiftedLookupTable => vec![StrategyKind::PreshiftedLookupTable],
            StrategyArg::LookupTable => vec![StrategyKind::LookupTable],
            StrategyArg::MagicBits => vec![StrategyKind::MagicBits],
            StrategyArg::Bmi => bmi_kind()?,
            StrategyArg::All => StrategyKind::ALL.to_vec(),
        };

        let mut layouts = Vec::with_capacity(4);
        for (layout_dims, layout_width, layout) in [
            (DimsArg::Two, WidthArg::W32, Layout::D2W32),
            (DimsArg::Two, WidthArg::W64, Layout::D2W64),
            (DimsArg::Three, WidthArg::W32, Layout::D3W32),
            (DimsArg::Three, WidthArg::W64, Layout::D3W64),
        ] {
            let dims_ok = dims == DimsArg::All || dims == layout_dims;
            let width_ok = width == WidthArg::All || width == layout_width;
            if dims_ok && width_ok {
                layouts.push(layout);
            }
        }

        Ok(Self {
            strategies,
            layouts,
            count,
            rounds,
            seed,
        })
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
fn bmi_kind() -> Result<Vec<StrategyKind>> {
    Ok(vec![StrategyKind::Bmi])
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
fn bmi_kind() -> Result<Vec<StrategyKind>> {
    bail!("the bmi strategy is not compiled in; rebuild with RUSTFLAGS=\"-C target-feature=+bmi2\"")
}

/// Generates `count` coordinates inside the bit budget of `layout`.
/// Unused components of 2D layouts stay zero.
fn generate_inputs(layout: Layout, count: usize, seed: u64) -> Vec<[u32; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mask = layout.component_mask();
    (0..count)
        .map(|_| {
            let mut c = [0u32; 3];
            for slot in c.iter_mut().take(layout.dims()) {
                *slot = rng.next_u32() & mask;
            }
            c
        })
        .collect()
}

#[inline(always)]
fn encode_one<S: Strategy>(layout: Layout, [x, y, z]: [u32; 3]) -> u64 {
    match layout {
        Layout::D2W32 => {
            encode_with(Coordinates2D::new(x as u16, y as u16), S::default()).value() as u64
        }
        Layout::D2W64 => encode_with(Coordinates2D::new(x, y), S::default()).value(),
        Layout::D3W32 => {
            encode_with(Coordinates3D::new(x as u16, y as u16, z as u16), S::default()).value()
                as u64
        }
        Layout::D3W64 => encode_with(Coordinates3D::new(x, y, z), S::default()).value(),
    }
}

#[inline(always)]
fn decode_one<S: Strategy>(layout: Layout, code: u64) -> [u32; 3] {
    match layout {
        Layout::D2W32 => {
            let c: Coordinates2D<u16> = decode_with(MortonCode(code as u32), S::default());
            [c.x as u32, c.y as u32, 0]
        }
        Layout::D2W64 => {
            let c: Coordinates2D<u32> = decode_with(MortonCode(code), S::default());
            [c.x, c.y, 0]
        }
        Layout::D3W32 => {
            let c: Coordinates3D<u16> = decode_with(MortonCode(code as u32), S::default());
            [c.x as u32, c.y as u32, c.z as u32]
        }
        Layout::D3W64 => {
            let c: Coordinates3D<u32> = decode_with(MortonCode(code), S::default());
            [c.x, c.y, c.z]
        }
    }
}

/// Checks `S` against the magic-bits reference on the whole batch.
fn verify<S: Strategy>(layout: Layout, inputs: &[[u32; 3]]) -> Result<()> {
    for &input in inputs {
        let code = encode_one::<S>(layout, input);
        let reference = encode_one::<MagicBits>(layout, input);
        if code != reference {
            log::error!(
                "{} {}: {:?} encoded to {:#x}, magic_bits gives {:#x}",
                S::KIND,
                layout.name(),
                input,
                code,
                reference
            );
            bail!("{} disagrees with magic_bits on {}", S::KIND, layout.name());
        }
        let back = decode_one::<S>(layout, code);
        if back != input {
            log::error!(
                "{} {}: {:#x} decoded to {:?}, expected {:?}",
                S::KIND,
                layout.name(),
                code,
                back,
                input
            );
            bail!("{} does not round-trip on {}", S::KIND, layout.name());
        }
    }
    log::debug!("{} {}: {} inputs verified", S::KIND, layout.name(), inputs.len());
    Ok(())
}

/// Timing for one strategy on one layout, in nanoseconds per operation.
struct Row {
    encode_ns: f64,
    decode_ns: f64,
}

fn run_strategy<S: Strategy>(layout: Layout, inputs: &[[u32; 3]], rounds: usize) -> Result<Row> {
    verify::<S>(layout, inputs)?;

    let mut codes = vec![0u64; inputs.len()];
    let ops = (rounds * inputs.len()) as f64;

    // Warmup: populate caches and the lookup tables.
    for (slot, &input) in codes.iter_mut().zip(inputs) {
        *slot = encode_one::<S>(layout, input);
    }

    let t0 = Platform::now();
    for _ in 0..rounds {
        for (slot, &input) in codes.iter_mut().zip(inputs) {
            *slot = encode_one::<S>(layout, black_box(input));
        }
        black_box(&mut codes);
    }
    let encode = Platform::measure(t0);

    let t0 = Platform::now();
    let mut checksum = 0u32;
    for _ in 0..rounds {
        for &code in &codes {
            let [x, y, z] = decode_one::<S>(layout, black_box(code));
            checksum ^= x ^ y ^ z;
        }
    }
    let decode = Platform::measure(t0);
    black_box(checksum);

    Ok(Row {
        encode_ns: encode.micros * 1_000.0 / ops,
        decode_ns: decode.micros * 1_000.0 / ops,
    })
}

fn run_kind(kind: StrategyKind, layout: Layout, inputs: &[[u32; 3]], rounds: usize) -> Result<Row> {
    match kind {
        StrategyKind::PreshiftedLookupTable => {
            run_strategy::<PreshiftedLookupTable>(layout, inputs, rounds)
        }
        StrategyKind::LookupTable => run_strategy::<LookupTable>(layout, inputs, rounds),
        StrategyKind::MagicBits => run_strategy::<MagicBits>(layout, inputs, rounds),
        #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
        StrategyKind::Bmi => run_strategy::<Bmi>(layout, inputs, rounds),
    }
}

/// Main entry point for the benchmark suite.
pub fn run_suite(config: &SuiteConfig) -> Result<()> {
    // 1. Column widths for the results table.
    let w_strategy = config
        .strategies
        .iter()
        .map(|k| k.name().len())
        .fold("Strategy".len(), max);
    let w_layout = "Layout".len();
    let w_num = 12;

    // 2. Table header.
    let header = format!(
        "{:<w0$} | {:<w1$} | {:<w2$} | {:<w2$}",
        "Strategy",
        "Layout",
        "Encode(ns)",
        "Decode(ns)",
        w0 = w_strategy,
        w1 = w_layout,
        w2 = w_num
    );
    Platform::print(&header);
    Platform::print(&"-".repeat(header.len()));

    // 3. Execute benchmarks. Every strategy sees the same batch per layout.
    for &layout in &config.layouts {
        let inputs = generate_inputs(layout, config.count, config.seed);
        for &kind in &config.strategies {
            let row = run_kind(kind, layout, &inputs, config.rounds)?;
            Platform::print(&format!(
                "{:<w0$} | {:<w1$} | {:<w2$.3} | {:<w2$.3}",
                kind.name(),
                layout.name(),
                row.encode_ns,
                row.decode_ns,
                w0 = w_strategy,
                w1 = w_layout,
                w2 = w_num
            ));
        }
    }

    log::info!("all strategies agree with magic_bits on every batch");
    Ok(())
}
