//! A minimal stand-in for the host charting library: evenly spaced slots on
//! the x axis and a linear liquidity scale with its origin at the bottom.

use super::renderer::{BitmapScope, PaneBar, PaneRendererData, PriceToCoordinate};
use super::series::LiquidityBarData;

/// Linear value → y mapping over a pane of `height` media px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub max_value: f64,
    pub height: f64,
    /// Fraction of the pane kept free above the tallest bar.
    pub top_margin: f64,
}

impl PriceToCoordinate for LinearScale {
    fn price_to_coordinate(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let usable = self.height * (1.0 - self.top_margin.clamp(0.0, 0.9));
        if self.max_value <= 0.0 {
            return Some(self.height);
        }
        Some(self.height - (value / self.max_value).clamp(0.0, 1.0) * usable)
    }
}

/// Pane geometry in media pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
    pub top_margin: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            width: 800.0,
            height: 300.0,
            pixel_ratio: 1.0,
            top_margin: 0.1,
        }
    }
}

impl ChartLayout {
    pub fn bitmap_scope(&self) -> BitmapScope {
        BitmapScope {
            bitmap_width: (self.width * self.pixel_ratio).round() as i32,
            bitmap_height: (self.height * self.pixel_ratio).round() as i32,
            horizontal_pixel_ratio: self.pixel_ratio,
            vertical_pixel_ratio: self.pixel_ratio,
        }
    }

    /// Lay `bars` out across the full width, all visible.
    pub fn project(&self, bars: Vec<LiquidityBarData>) -> (PaneRendererData, LinearScale) {
        let n = bars.len();
        let bar_spacing = if n == 0 { 0.0 } else { self.width / n as f64 };
        let max_value = bars.iter().map(|b| b.liquidity).fold(0.0, f64::max);

        let bars: Vec<PaneBar> = bars
            .into_iter()
            .enumerate()
            .map(|(i, data)| PaneBar {
                x: (i as f64 + 0.5) * bar_spacing,
                data,
            })
            .collect();

        let data = PaneRendererData {
            bars,
            bar_spacing,
            visible_range: (n > 0).then_some(0..n),
        };
        let scale = LinearScale {
            max_value,
            height: self.height,
            top_margin: self.top_margin,
        };
        (data, scale)
    }
}
