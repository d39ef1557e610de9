use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Test, proof and benchmark automation for prav-bits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the test suite against one or all bit-scan backends
    Test {
        #[arg(long, short, value_enum, default_value_t = Backend::All)]
        backend: Backend,

        /// Run with --release (debug assertions off)
        #[arg(long, default_value_t = false)]
        release: bool,
    },
    /// Runs the Kani proofs
    Kani {
        /// Only run harnesses whose name contains this string
        #[arg(long, short)]
        harness: Option<String>,
    },
    /// Runs the iai-callgrind benchmarks
    Bench {
        /// Pin the benchmark process to a specific CPU core (using taskset)
        #[arg(long, short = 'p')]
        pin_core: Option<usize>,
    },
    /// Checks the library compiles for all supported targets
    CheckAll,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Backend {
    /// Compiler count builtins (default build)
    Native,
    /// SWAR fallback (`--features portable`)
    Portable,
    /// BMI1/LZCNT/POPCNT instructions (x86-64-v3)
    Hardware,
    /// Every backend in turn
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::Test { backend, release } => {
            run_tests(&sh, backend, release)?;
        }
        Commands::Kani { harness } => {
            run_kani(&sh, harness)?;
        }
        Commands::Bench { pin_core } => {
            run_bench(&sh, pin_core)?;
        }
        Commands::CheckAll => {
            check_all(&sh)?;
        }
    }

    Ok(())
}

fn run_tests(sh: &Shell, backend: Backend, release: bool) -> Result<()> {
    let profile: &[&str] = if release { &["--release"] } else { &[] };

    let backends: &[Backend] = match backend {
        Backend::All => &[Backend::Native, Backend::Portable, Backend::Hardware],
        ref one => std::slice::from_ref(one),
    };

    for &b in backends {
        match b {
            Backend::Native => {
                println!(">> Testing native backend...");
                cmd!(sh, "cargo test -p prav-bits {profile...}").run()?;
            }
            Backend::Portable => {
                println!(">> Testing portable backend...");
                cmd!(sh, "cargo test -p prav-bits --features portable {profile...}").run()?;
            }
            Backend::Hardware => {
                if !cfg!(target_arch = "x86_64") {
                    println!("!! Hardware backend needs an x86_64 host. Skipping.");
                    continue;
                }
                println!(">> Testing hardware backend (x86-64-v3: BMI1, LZCNT, POPCNT)...");
                let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=x86-64-v3");
                cmd!(sh, "cargo test -p prav-bits {profile...}").run()?;
            }
            Backend::All => unreachable!("expanded above"),
        }
    }

    println!(">> All selected backends passed.");
    Ok(())
}

fn run_kani(sh: &Shell, harness: Option<String>) -> Result<()> {
    ensure_kani(sh)?;

    println!(">> Running Kani proofs...");
    match harness {
        Some(h) => cmd!(sh, "cargo kani -p prav-bits --harness {h}").run()?,
        None => cmd!(sh, "cargo kani -p prav-bits").run()?,
    }
    Ok(())
}

fn run_bench(sh: &Shell, pin_core: Option<usize>) -> Result<()> {
    if cmd!(sh, "valgrind --version").read().is_err() {
        anyhow::bail!("'valgrind' not found; iai-callgrind needs it on PATH.");
    }
    ensure_iai_runner(sh)?;

    println!(">> Benchmarking prav-bits (iai-callgrind)...");
    match pin_core {
        Some(c) => {
            println!("   (Pinned to Core {})", c);
            let core = c.to_string();
            cmd!(sh, "taskset -c {core} cargo bench -p prav-bits --bench ops_breakdown").run()?;
        }
        None => cmd!(sh, "cargo bench -p prav-bits --bench ops_breakdown").run()?,
    }
    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    // Assume running from project root
    println!("--- Checking x86-64 (baseline) ---");
    {
        let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=x86-64");
        cmd!(sh, "cargo check -p prav-bits --lib --release").run()?;
        cmd!(sh, "cargo check -p prav-bits --lib --release --features portable").run()?;
    }

    println!("--- Checking x86-64-v3 (BMI1/LZCNT/POPCNT) ---");
    {
        let _env = sh.push_env("RUSTFLAGS", "-C target-cpu=x86-64-v3");
        cmd!(sh, "cargo check -p prav-bits --lib --release").run()?;
    }

    // The library is no_std, so plain `cargo check` works for every target
    // once its core library is installed.
    for target in [
        "aarch64-unknown-linux-gnu",
        "armv7r-none-eabi",
        "wasm32-unknown-unknown",
    ] {
        println!("--- Checking {} ---", target);
        ensure_target(sh, target)?;
        cmd!(sh, "cargo check -p prav-bits --lib --release --target {target}").run()?;
    }

    println!(">> All targets checked successfully.");
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let output = cmd!(sh, "rustup target list --installed").read()?;
    if !output.contains(target) {
        println!("!! Target '{}' not found. Installing via rustup...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}

fn ensure_kani(sh: &Shell) -> Result<()> {
    if cmd!(sh, "cargo kani --version").read().is_err() {
        println!("!! 'kani-verifier' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install --locked kani-verifier").run()?;
        cmd!(sh, "cargo kani setup").run()?;
    }
    Ok(())
}

fn ensure_iai_runner(sh: &Shell) -> Result<()> {
    if cmd!(sh, "iai-callgrind-runner --version").read().is_err() {
        println!("!! 'iai-callgrind-runner' is not installed. Installing via cargo...");
        cmd!(sh, "cargo install --version 0.14.0 iai-callgrind-runner").run()?;
    }
    Ok(())
}
