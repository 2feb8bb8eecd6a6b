//! Bounded search for tautologies.
//!
//! Run with: `cargo run --release --example search -- --depth 2 P Q`

use clap::Parser;
use color_eyre::eyre::eyre;
use num_bigint::BigUint;
use taut_rs::generate::{check_atoms, count_candidates, Generator, GeneratorConfig};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Bounded tautology search over a fixed set of atoms")]
struct Cli {
    /// Atoms (variable names) to build formulas from
    #[arg(required = true)]
    atoms: Vec<String>,

    /// Maximum formula depth
    #[arg(short, long, default_value = "2")]
    depth: u32,

    /// Number of ranked results to keep
    #[arg(short = 'n', long, default_value = "64")]
    limit: usize,

    /// Refuse to run when more unique candidates than this would be evaluated
    #[arg(long, default_value = "5000000")]
    budget: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    check_atoms(&cli.atoms).map_err(|e| eyre!("Invalid atoms: {}", e))?;

    let candidates = count_candidates(cli.depth, cli.atoms.len());
    log::info!("Depth {} over {} atoms: {} unique candidates", cli.depth, cli.atoms.len(), candidates);
    if candidates > BigUint::from(cli.budget) {
        return Err(eyre!(
            "{} candidates exceed the budget of {}; lower --depth or raise --budget",
            candidates,
            cli.budget
        ));
    }

    let start = std::time::Instant::now();
    let config = GeneratorConfig::new(cli.depth, cli.atoms).with_max_results(cli.limit);
    let generation = Generator::new(config).run();
    let elapsed = start.elapsed();

    println!("Search:");
    println!("  Raw candidates: {}", generation.stats.raw_candidates);
    println!("  Unique candidates: {}", generation.stats.unique_candidates);
    println!("  Tautologies: {}", generation.stats.tautologies);
    println!("  Time: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    println!();

    for (i, g) in generation.formulas.iter().enumerate() {
        println!("{:>3}. {}", i + 1, g.text);
    }

    Ok(())
}
