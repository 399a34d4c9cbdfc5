use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build and benchmark automation for morton-core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the morton-bench suite on the host
    Bench {
        /// Build with BMI2 enabled so the bmi strategy is included
        #[arg(long, default_value_t = false)]
        bmi2: bool,

        /// Run with --release
        #[arg(long, default_value_t = true)]
        release: bool,

        /// Pin the benchmark process to a specific CPU core (using taskset)
        #[arg(long, short = 'p')]
        pin_core: Option<usize>,

        /// Strategy to benchmark
        #[arg(long, short, value_enum, default_value_t = StrategyArg::All)]
        strategy: StrategyArg,
    },
    /// Checks and tests the workspace with and without BMI2
    CheckAll,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum StrategyArg {
    PreshiftedLookupTable,
    LookupTable,
    MagicBits,
    Bmi,
    All,
}

const BMI2_FLAGS: &str = "-C target-feature=+bmi2";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::Bench {
            bmi2,
            release,
            pin_core,
            strategy,
        } => {
            run_bench(&sh, bmi2, release, pin_core, strategy)?;
        }
        Commands::CheckAll => {
            check_all(&sh)?;
        }
    }

    Ok(())
}

fn run_bench(
    sh: &Shell,
    bmi2: bool,
    release: bool,
    pin_core: Option<usize>,
    strategy: StrategyArg,
) -> Result<()> {
    if strategy == StrategyArg::Bmi && !bmi2 {
        anyhow::bail!("--strategy bmi needs --bmi2");
    }

    let profile_flag = if release { "--release" } else { "" };
    let prefix = match pin_core {
        Some(c) => format!("taskset -c {} ", c),
        None => String::new(),
    };
    let strategy_name = strategy
        .to_possible_value()
        .context("strategy has no command-line name")?
        .get_name()
        .to_string();

    let rust_flags = if bmi2 { BMI2_FLAGS } else { "-C target-cpu=x86-64" };
    let _env = sh.push_env("RUSTFLAGS", rust_flags);

    println!(">> Benchmarking morton-core ({})...", rust_flags);
    if let Some(c) = pin_core {
        println!("   (Pinned to Core {})", c);
    }

    // RUSTFLAGS changes do not always invalidate the cached binary.
    println!("   [Clean] Cleaning morton-bench...");
    cmd!(sh, "cargo clean -p morton-bench -p morton-core").run()?;

    let cmd_str = format!(
        "{}cargo run -p morton-bench {} -- --strategy {}",
        prefix, profile_flag, strategy_name
    );
    cmd!(sh, "bash -c {cmd_str}").run()?;
    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    println!("--- Portable build (no BMI2) ---");
    {
        let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=x86-64");
        cmd!(sh, "cargo check --workspace --all-targets").run()?;
        cmd!(sh, "cargo test --workspace").run()?;
    }

    println!("--- BMI2 build ---");
    if !host_has_bmi2(sh) {
        println!("!! Host CPU does not report bmi2. Checking only, tests skipped.");
        let _env = sh.push_env("RUSTFLAGS", BMI2_FLAGS);
        cmd!(sh, "cargo check --workspace --all-targets").run()?;
    } else {
        let _env = sh.push_env("RUSTFLAGS", BMI2_FLAGS);
        cmd!(sh, "cargo check --workspace --all-targets").run()?;
        cmd!(sh, "cargo test --workspace").run()?;
    }

    println!(">> All configurations checked successfully.");
    Ok(())
}

fn host_has_bmi2(sh: &Shell) -> bool {
    cmd!(sh, "grep -qw bmi2 /proc/cpuinfo").quiet().run().is_ok()
}
