use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use liquidity_depth::depth::{build_profile, DepthConfig, DepthProfile};
use liquidity_depth::model::{DepthSnapshot, LiquidityBucket};
use liquidity_depth::validate;

/// Configuration for the `depth` command.
pub struct ReportConfig {
    pub snapshot_path: PathBuf,
    pub depth: DepthConfig,
    pub format: String,
    pub output: Option<PathBuf>,
}

/// Entry point for the `depth` command.
pub fn run(config: &ReportConfig) -> Result<()> {
    config.depth.validate()?;
    let snapshot = validate::load_snapshot(&config.snapshot_path)?;
    let profile = build_profile(&snapshot, &config.depth);

    match config.format.as_str() {
        "table" => {
            print_table(&snapshot, &profile);
            Ok(())
        }
        "json" => {
            let json = serde_json::to_string_pretty(&profile)?;
            write_output(&json, config.output.as_deref())
        }
        "csv" => {
            let csv = to_csv(&profile.buckets)?;
            write_output(&csv, config.output.as_deref())
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: table, json, csv"),
    }
}

/// Flat bucket row for CSV export.
#[derive(Serialize)]
struct BucketCsvRow {
    tick: i32,
    tick_lower: i32,
    tick_upper: i32,
    price: f64,
    total_liquidity: String,
    amount_base_locked: f64,
    amount_quote_locked: f64,
    usd_value_locked: f64,
    pools: usize,
    is_current_tick: bool,
}

fn to_csv(buckets: &[LiquidityBucket]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for b in buckets {
        wtr.serialize(BucketCsvRow {
            tick: b.tick,
            tick_lower: b.tick_lower,
            tick_upper: b.tick_upper,
            price: b.price,
            total_liquidity: b.total_liquidity.to_string(),
            amount_base_locked: b.amount_base_locked,
            amount_quote_locked: b.amount_quote_locked,
            usd_value_locked: b.usd_value_locked,
            pools: b.pool_contributions.len(),
            is_current_tick: b.is_current_tick,
        })
        .context("writing CSV row")?;
    }
    let bytes = wtr.into_inner().context("flushing CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

fn print_table(snapshot: &DepthSnapshot, profile: &DepthProfile) {
    let base_scale = 10f64.powi(snapshot.base.decimals as i32);
    let quote_scale = 10f64.powi(snapshot.quote.decimals as i32);

    println!("\n{}", "═".repeat(110));
    println!(
        "  Depth: {}  ticks [{}, {}]  bucket {}  current {}",
        snapshot.pair(),
        profile.range.min,
        profile.range.max,
        profile.bucket_size,
        profile.current_tick
    );
    println!("{}", "═".repeat(110));
    println!(
        "  {:>9} {:>16} {:>24} {:>16} {:>16} {:>14} {:>5}",
        "Tick",
        "Price",
        "Liquidity",
        snapshot.base.symbol,
        snapshot.quote.symbol,
        "USD",
        "Pools",
    );
    println!("  {}", "-".repeat(106));
    for b in &profile.buckets {
        println!(
            "  {:>9} {:>16.6} {:>24} {:>16.4} {:>16.4} {:>14.2} {:>5}{}",
            b.tick,
            b.price,
            b.total_liquidity,
            b.amount_base_locked / base_scale,
            b.amount_quote_locked / quote_scale,
            b.usd_value_locked,
            b.pool_contributions.len(),
            if b.is_current_tick { " ◀" } else { "" },
        );
    }
    println!("{}", "═".repeat(110));

    let usd: f64 = profile.buckets.iter().map(|b| b.usd_value_locked).sum();
    println!("  {} buckets, {:.2} USD in window", profile.buckets.len(), usd);
}

/// Write to a file, or stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing output to {}", path.display()))?;
            eprintln!("Written to {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
