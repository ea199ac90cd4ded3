//! Climate Index Correlation
//!
//! Correlates a climate index (SOI, NAO, …) with a wave statistic series.
//!
//! The two series are joined on date before comparison. Dates present in
//! only one series drop out of the join and are reported; series are never
//! paired by position.
//!
//! 1. Parse both dated series (gaps: empty cells or NaN)
//! 2. Optionally aggregate both to monthly means (--monthly)
//! 3. Optionally replace wave values with monthly anomalies (--anomalies)
//! 4. Align on date and compute the Pearson correlation
//!
//! Usage:
//!   cargo run --bin correlate_climate_index -- --index soi.csv --waves hs_daily.csv --monthly --anomalies

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use runup_analysis::analysis::climate::{
    align_by_date, monthly_anomalies, monthly_means, pearson_correlation,
};
use runup_analysis::ingest::climate_series::{parse_date_series, DatedValue};

#[derive(Parser)]
#[command(name = "correlate_climate_index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Date-aligned correlation of a climate index with wave statistics", long_about = None)]
struct Args {
    /// Climate index series (date,value)
    #[arg(long)]
    index: PathBuf,

    /// Wave statistic series (date,value)
    #[arg(long)]
    waves: PathBuf,

    /// Aggregate both series to monthly means before aligning
    #[arg(long)]
    monthly: bool,

    /// Use monthly anomalies of the wave series
    #[arg(long)]
    anomalies: bool,

    /// Field separator of both files
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("🌐 Climate Index Correlation");
    println!("============================\n");

    let mut index = read_series(&args.index, args.delimiter)?;
    let mut waves = read_series(&args.waves, args.delimiter)?;
    println!("✓ Index: {} values, waves: {} values", index.len(), waves.len());

    if args.monthly {
        index = monthly_means(&index);
        waves = monthly_means(&waves);
        println!("✓ Aggregated to {} / {} monthly means", index.len(), waves.len());
    }
    if args.anomalies {
        waves = monthly_anomalies(&waves);
        println!("✓ Converted waves to monthly anomalies");
    }

    let alignment = align_by_date(&index, &waves);
    println!("\n🔗 Aligned on date:");
    println!("  Matched dates:       {}", alignment.pairs.len());
    println!("  Index-only dates:    {}", alignment.unmatched_left);
    println!("  Wave-only dates:     {}", alignment.unmatched_right);
    if let (Some(first), Some(last)) = (alignment.pairs.first(), alignment.pairs.last()) {
        println!("  Period:              {} to {}", first.date, last.date);
    }

    let r = pearson_correlation(&alignment.pairs).context("computing correlation")?;
    println!("\n{}", "=".repeat(50));
    println!("Pearson r = {:.3}  (r² = {:.3}, n = {})", r, r * r, alignment.pairs.len());
    println!("{}", "=".repeat(50));

    Ok(())
}

fn read_series(path: &Path, delimiter: char) -> anyhow::Result<Vec<DatedValue>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let series = parse_date_series(&text, delimiter).with_context(|| format!("parsing {}", path.display()))?;
    Ok(series)
}
