//! Wave Run-up Analysis
//!
//! Reads a delimited table of run-up observations and, for each row:
//! 1. Validates wave height, period, slope, grain size and run-up
//! 2. Computes the Iribarren number from Hs, Tp and beach slope
//! 3. Classifies the beach as dissipative, intermediate or reflective
//! 4. Computes normalized run-up R2/Hs
//!
//! Writes the table back with the three derived columns appended and,
//! optionally, a JSON report with per-dataset statistics, a least-squares
//! fit of R2/Hs against ε, and the skill of the Hunt and Stockdon formulas.
//!
//! Usage:
//!   cargo run --release -- --input data/runup_observations.csv
//!   cargo run --release -- --input obs.csv --output out.csv --report report.json
//!
//! Environment:
//!   RUNUP_CONFIG - configuration file (default: runup.toml)
//!   RUST_LOG     - log filter, overrides --log-level

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use runup_analysis::analysis::runup::analyze_table;
use runup_analysis::config::load_or_default;
use runup_analysis::export::{write_report, write_table, AnalysisReport};
use runup_analysis::model::BeachType;

/// Iribarren number and run-up analysis of wave observations
#[derive(Parser)]
#[command(name = "runup_analysis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wave run-up and surf similarity analysis", long_about = None)]
struct Cli {
    /// Input table (delimited text with header row)
    #[arg(short, long)]
    input: PathBuf,

    /// Output table [default: <input stem>_analyzed.<ext>]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file [default: $RUNUP_CONFIG or runup.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON analysis report to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    println!("🌊 Wave Run-up Analysis");
    println!("=======================\n");

    let config = load_or_default(cli.config.as_deref()).context("loading configuration")?;
    let thresholds = config.beach_thresholds();
    println!("⚙️  Beach-type thresholds:");
    println!("  - dissipative:  ε < {:.2}", thresholds.dissipative_below);
    println!(
        "  - intermediate: {:.2} ≤ ε < {:.2}",
        thresholds.dissipative_below, thresholds.reflective_from
    );
    println!("  - reflective:   ε ≥ {:.2}\n", thresholds.reflective_from);

    println!("📋 Reading {}...", cli.input.display());
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let outcome = analyze_table(&text, &config)
        .with_context(|| format!("analyzing {}", cli.input.display()))?;
    println!(
        "✓ Analyzed {} of {} rows\n",
        outcome.analyzed.len(),
        outcome.total()
    );

    if !outcome.rejected.is_empty() {
        println!("⚠ Rejected rows:");
        for rejected in &outcome.rejected {
            println!("  line {}: {}", rejected.row, rejected.error);
        }
        println!();
    }

    let output = cli.output.clone().unwrap_or_else(|| default_output_path(&cli.input));
    write_table(&output, &outcome.analyzed, config.table.delimiter)?;
    println!("✓ Wrote {}", output.display());

    if let Some(report_path) = &cli.report {
        let report = AnalysisReport::build(&cli.input.display().to_string(), &outcome, &config)?;
        write_report(report_path, &report)?;
        println!("✓ Wrote {}", report_path.display());
    }

    // Summary
    let count = |t: BeachType| outcome.analyzed.iter().filter(|a| a.beach_type == t).count();
    println!("\n{}", "=".repeat(50));
    println!("Summary:");
    println!("  Dissipative:  {}", count(BeachType::Dissipative));
    println!("  Intermediate: {}", count(BeachType::Intermediate));
    println!("  Reflective:   {}", count(BeachType::Reflective));
    println!("  Rejected:     {}", outcome.rejected.len());
    println!("{}", "=".repeat(50));

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `obs.csv` → `obs_analyzed.csv`, next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "runup".to_string());
    let name = match input.extension() {
        Some(ext) => format!("{}_analyzed.{}", stem, ext.to_string_lossy()),
        None => format!("{}_analyzed", stem),
    };
    input.with_file_name(name)
}
