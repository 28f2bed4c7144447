use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use liquidity_depth::depth::config::{DEFAULT_HALF_WIDTH_TICKS, DEFAULT_TARGET_BUCKET_COUNT};
use liquidity_depth::depth::DepthConfig;

/// Concentrated-liquidity depth engine: bucket multi-pool tick snapshots
/// into a depth profile and render it as a bar chart.
#[derive(Parser)]
#[command(name = "liquidity-depth", version, about)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Window settings shared by the aggregation commands.
#[derive(Args, Clone, Copy)]
pub struct WindowArgs {
    /// Ticks shown on each side of the current tick
    #[arg(long, env = "LIQUIDITY_DEPTH_HALF_WIDTH", default_value_t = DEFAULT_HALF_WIDTH_TICKS)]
    pub half_width: i32,

    /// Target number of buckets across the window
    #[arg(long, env = "LIQUIDITY_DEPTH_BUCKETS", default_value_t = DEFAULT_TARGET_BUCKET_COUNT)]
    pub buckets: u32,
}

impl WindowArgs {
    pub fn depth_config(&self) -> DepthConfig {
        DepthConfig {
            half_width_ticks: self.half_width,
            target_bucket_count: self.buckets,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Output the JSON schema for snapshot files
    Schema,

    /// Output an example snapshot JSON to stdout
    Example,

    /// Validate a snapshot JSON file
    Validate {
        /// Path to the snapshot JSON file
        file: PathBuf,
    },

    /// Print the constant-liquidity segments of every pool
    Segments {
        /// Path to the snapshot JSON file
        file: PathBuf,
    },

    /// Aggregate pools into display buckets
    Depth {
        /// Path to the snapshot JSON file
        file: PathBuf,

        #[command(flatten)]
        window: WindowArgs,

        /// Output format: table (default), json, or csv
        #[arg(long, default_value = "table")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Render the depth profile as ASCII bars or an SVG bar chart
    Render {
        /// Path to the snapshot JSON file
        file: PathBuf,

        #[command(flatten)]
        window: WindowArgs,

        /// Output format: ascii (default) or svg
        #[arg(long, default_value = "ascii")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Chart width in media pixels
        #[arg(long, default_value = "800")]
        width: f64,

        /// Chart height in media pixels
        #[arg(long, default_value = "300")]
        height: f64,

        /// Device pixel ratio
        #[arg(long, default_value = "1.0")]
        pixel_ratio: f64,

        /// Tick of the bucket to highlight as hovered
        #[arg(long, allow_hyphen_values = true)]
        hover_tick: Option<i32>,

        /// JSON file with series style overrides
        #[arg(long)]
        style: Option<PathBuf>,
    },
}
