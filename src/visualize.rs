use std::path::PathBuf;

use anyhow::{Context, Result};

use liquidity_depth::depth::{build_profile, DepthConfig, DepthProfile};
use liquidity_depth::model::DepthSnapshot;
use liquidity_depth::render::svg::to_svg;
use liquidity_depth::render::{
    bars_from_buckets, classify_bar, current_tick_progress, BarPaint, ChartLayout, Color,
    LiquidityBarData, LiquidityBarRenderer, LiquiditySeriesOptions, RecordingCanvas, TokenSide,
};
use liquidity_depth::validate;

use crate::report::write_output;

/// Width of the longest ASCII bar, in characters.
const ASCII_BAR_WIDTH: usize = 50;

const BACKGROUND: Color = Color::rgb(0x1a, 0x1a, 0x2e);

/// Configuration for the `render` command.
pub struct RenderConfig {
    pub snapshot_path: PathBuf,
    pub depth: DepthConfig,
    pub format: String,
    pub output: Option<PathBuf>,
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
    pub hover_tick: Option<i32>,
    pub style: Option<PathBuf>,
}

/// Entry point for the `render` command.
pub fn run(config: &RenderConfig) -> Result<()> {
    config.depth.validate()?;
    let snapshot = validate::load_snapshot(&config.snapshot_path)?;
    let profile = build_profile(&snapshot, &config.depth);
    let options = series_options(config, &snapshot, &profile)?;
    let bars = bars_from_buckets(&profile.buckets, &snapshot.base, &snapshot.quote);

    match config.format.as_str() {
        "ascii" => {
            let text = render_ascii(&snapshot, &bars, &options);
            write_output(&text, config.output.as_deref())
        }
        "svg" => {
            let svg = render_svg(config, &profile, bars, options);
            write_output(&svg, config.output.as_deref())
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: ascii, svg"),
    }
}

/// Style file (if any) overlaid with the live market position.
fn series_options(
    config: &RenderConfig,
    snapshot: &DepthSnapshot,
    profile: &DepthProfile,
) -> Result<LiquiditySeriesOptions> {
    let mut options = match &config.style {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading style file {}", path.display()))?;
            serde_json::from_str::<LiquiditySeriesOptions>(&contents)
                .with_context(|| format!("parsing style file {}", path.display()))?
        }
        None => LiquiditySeriesOptions::default(),
    };
    options.active_tick = profile.current_tick;
    options.current_tick_progress = snapshot
        .pools
        .first()
        .and_then(|pool| current_tick_progress(pool, &profile.buckets));
    Ok(options)
}

// ── SVG ──────────────────────────────────────────────────────────────

fn render_svg(
    config: &RenderConfig,
    profile: &DepthProfile,
    bars: Vec<LiquidityBarData>,
    options: LiquiditySeriesOptions,
) -> String {
    let layout = ChartLayout {
        width: config.width,
        height: config.height,
        pixel_ratio: config.pixel_ratio,
        ..ChartLayout::default()
    };
    let scope = layout.bitmap_scope();
    let (data, scale) = layout.project(bars);

    let mut renderer = LiquidityBarRenderer::new(options.clone());
    renderer.update(data, options);
    // Hover is addressed by bucket center, so snap any tick to its bucket.
    let hovered = config.hover_tick.and_then(|t| {
        profile
            .buckets
            .iter()
            .find(|b| b.contains_tick(t))
            .map(|b| b.tick)
    });
    renderer.set_hovered_tick(hovered);

    let mut canvas = RecordingCanvas::new();
    renderer.draw(&mut canvas, &scope, &scale);
    to_svg(
        canvas.commands(),
        scope.bitmap_width,
        scope.bitmap_height,
        Some(BACKGROUND),
    )
}

// ── ASCII ────────────────────────────────────────────────────────────

fn render_ascii(
    snapshot: &DepthSnapshot,
    bars: &[LiquidityBarData],
    options: &LiquiditySeriesOptions,
) -> String {
    let max = bars.iter().map(|b| b.liquidity).fold(0.0, f64::max);
    let mut out = String::new();
    out.push_str(&format!(
        "{}  (█ {}  ▒ {}  ▓ current)\n",
        snapshot.pair(),
        snapshot.base.symbol,
        snapshot.quote.symbol
    ));

    for bar in bars {
        let len = if max > 0.0 {
            ((bar.liquidity / max) * ASCII_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let body = match classify_bar(bar, options) {
            BarPaint::Stacked { base_ratio } => {
                let base = ((len as f64) * base_ratio).round() as usize;
                format!("{}{}", "▒".repeat(len - base.min(len)), "█".repeat(base.min(len)))
            }
            BarPaint::CurrentTick { .. } => "▓".repeat(len),
            BarPaint::Single {
                side: TokenSide::Base,
            } => "█".repeat(len),
            BarPaint::Single {
                side: TokenSide::Quote,
            } => "▒".repeat(len),
        };
        out.push_str(&format!(
            "{:>9} │{}{}\n",
            bar.tick,
            body,
            if bar.is_current_tick { " ◀" } else { "" }
        ));
    }
    out
}
