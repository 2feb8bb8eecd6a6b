//! Checks a formula for tautology and shows its truth table.
//!
//! Run with: `cargo run --example check -- "(P -> Q) & P -> Q"`

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use taut_rs::export::Snapshot;
use taut_rs::generate::{Generator, GeneratorConfig};
use taut_rs::layout::layout;
use taut_rs::parser::parse_formula;
use taut_rs::tautology::{check_tautology, truth_table};

#[derive(Parser)]
#[command(name = "check")]
#[command(about = "Propositional tautology checker")]
struct Cli {
    /// Formula to check
    formula: String,

    /// Print the full truth table
    #[arg(short, long)]
    table: bool,

    /// Write the laid-out tree as Graphviz DOT
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Write a JSON snapshot of the analysis
    #[arg(long)]
    json: Option<PathBuf>,

    /// Depth of the tautology search included in the snapshot
    #[arg(long, default_value = "1")]
    search_depth: u32,

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

    let formula = parse_formula(&cli.formula).wrap_err_with(|| format!("Could not parse {:?}", cli.formula))?;
    println!("Formula: {}", formula);
    println!("  depth: {}, size: {}, variables: {}", formula.depth(), formula.size(), formula.vars().len());

    let result = check_tautology(&formula);
    if result.is_tautology() {
        println!("Tautology: yes");
    } else {
        println!("Tautology: no ({} falsifying assignments)", result.falsifying_assignments().len());
        for env in result.falsifying_assignments() {
            println!("  {}", env);
        }
    }

    if cli.table {
        let table = truth_table(&formula);
        println!();
        println!("{} | value", table.vars().join(" "));
        for (env, value) in table.rows() {
            let bits: Vec<String> = env.iter().map(|(name, v)| format!("{:>w$}", v as u8, w = name.len())).collect();
            println!("{} | {}", bits.join(" "), *value as u8);
        }
        println!("{} of {} rows are models", table.models(), table.rows().len());
    }

    if let Some(path) = &cli.dot {
        let l = layout(&formula);
        log::info!("Layout: {} nodes, {}x{}", l.node_count(), l.width, l.height);
        std::fs::write(path, l.to_dot()?)?;
        log::info!("Wrote DOT to {:?}", path);
    }

    if let Some(path) = &cli.json {
        let atoms: Vec<String> = formula.vars().into_iter().map(String::from).collect();
        let generated = Generator::new(GeneratorConfig::new(cli.search_depth, atoms)).run().formulas;
        let snapshot = Snapshot::build(&cli.formula, &generated);
        std::fs::write(path, snapshot.to_json()?)?;
        log::info!("Wrote snapshot to {:?}", path);
    }

    Ok(())
}
