//! # Morton Codec Benchmark Suite
//!
//! Throughput harness for the `morton-core` encoding strategies. For every
//! selected strategy, dimensionality and code width it generates a seeded
//! batch of coordinates inside the bit budget, checks the strategy against
//! the magic-bits reference on that batch, then times encode and decode.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod benchmark;
mod platforms;

use anyhow::Result;
use clap::Parser;

use crate::benchmark::{run_suite, DimsArg, StrategyArg, SuiteConfig, WidthArg};
use crate::platforms::{BenchmarkHost, Platform};

// --- CLI Arguments ---
#[derive(Parser)]
#[command(name = "morton-bench")]
#[command(about = "Benchmark morton-core encoding strategies", long_about = None)]
struct Cli {
    /// Strategy to benchmark
    #[arg(short, long, value_enum, default_value_t = StrategyArg::All)]
    strategy: StrategyArg,

    /// Dimensionality to benchmark
    #[arg(short, long, value_enum, default_value_t = DimsArg::All)]
    dims: DimsArg,

    /// Code width in bits
    #[arg(short, long, value_enum, default_value_t = WidthArg::All)]
    width: WidthArg,

    /// Coordinates per batch
    #[arg(short, long, default_value_t = 8192)]
    count: usize,

    /// Timed passes over the batch
    #[arg(short, long, default_value_t = 100)]
    rounds: usize,

    /// Seed for the coordinate generator
    #[arg(long, default_value_t = 0x1234_5678)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SuiteConfig::new(cli.strategy, cli.dims, cli.width, cli.count, cli.rounds, cli.seed)?;

    Platform::print("[Performance Test] Morton encode/decode");
    Platform::print(Platform::platform_name());
    log::info!(
        "strategies: {:?}, layouts: {:?}, count: {}, rounds: {}, seed: {:#x}",
        config.strategies.iter().map(|k| k.name()).collect::<Vec<_>>(),
        config.layouts.iter().map(|l| l.name()).collect::<Vec<_>>(),
        config.count,
        config.rounds,
        config.seed
    );

    run_suite(&config)
}
