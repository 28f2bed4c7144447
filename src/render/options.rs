use serde::{Deserialize, Serialize};

use super::color::Color;

/// Visual options of the liquidity bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquiditySeriesOptions {
    /// Liquidity held in the base token (ticks above the active tick).
    pub base_color: Color,
    /// Liquidity held in the quote token (ticks below the active tick).
    pub quote_color: Color,
    pub current_tick_color: Color,
    /// Strip painted behind the hovered column.
    pub hover_highlight_color: Color,
    /// Opacity of every bar except the hovered one while a tick is hovered.
    pub inactive_opacity: f64,
    /// Minimum painted bar height, device pixels.
    pub min_bar_height: i32,
    /// Corner radius, media pixels.
    pub corner_radius: f64,
    /// Opacity of the crossed-portion overlay on the current tick bar.
    pub progress_overlay_opacity: f64,
    pub active_tick: i32,
    /// Fraction of the current tick's range the live price has crossed.
    pub current_tick_progress: Option<f64>,
}

impl Default for LiquiditySeriesOptions {
    fn default() -> Self {
        LiquiditySeriesOptions {
            base_color: Color::rgb(0xef, 0x53, 0x50),
            quote_color: Color::rgb(0x26, 0xa6, 0x9a),
            current_tick_color: Color::rgb(0xf0, 0xb9, 0x0b),
            hover_highlight_color: Color::rgba(0x78, 0x7b, 0x86, 0.15),
            inactive_opacity: 0.4,
            min_bar_height: 2,
            corner_radius: 2.0,
            progress_overlay_opacity: 0.85,
            active_tick: 0,
            current_tick_progress: None,
        }
    }
}
