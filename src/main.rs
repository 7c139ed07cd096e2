//! # Main — CLI entry point
//!
//! Thin wrapper over the library: parse flags, build a generator, print
//! primes in decimal, one per line. Logging goes to stderr so stdout stays
//! pipeable.

use anyhow::Result;
use clap::Parser;
use rug::Integer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use primeforge::PrimeGenerator;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "primeforge", about = "Generate cryptographically-sized random primes")]
struct Cli {
    /// Bit width of each prime (values below 2048 are raised to 2048)
    #[arg(long, default_value_t = 2048)]
    bits: u32,

    /// Miller-Rabin rounds (values below 100 are raised to 100; higher = more certain but slower)
    #[arg(long, default_value_t = 100)]
    accuracy: u32,

    /// Seed for the random stream; identical seeds reproduce identical primes.
    /// When omitted, the stream is seeded from the wall clock — fine for
    /// experiments, not for key material.
    #[arg(long, env = "PRIMEFORGE_SEED")]
    seed: Option<u64>,

    /// How many primes to print
    #[arg(long, default_value_t = 1)]
    count: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut generator = match cli.seed {
        Some(seed) => PrimeGenerator::new(cli.bits, cli.accuracy, &Integer::from(seed)),
        None => PrimeGenerator::insecure_from_clock(cli.bits, cli.accuracy),
    };
    info!(
        bits = generator.bits(),
        accuracy = generator.accuracy(),
        count = cli.count,
        "generating primes"
    );

    for _ in 0..cli.count {
        let prime = generator.get_prime()?;
        println!("{prime}");
    }
    Ok(())
}
