use std::ops::Range;

use super::canvas::{BitmapRect, Canvas, CornerRadii};
use super::columns::{calculate_column_positions, ColumnPosition};
use super::options::LiquiditySeriesOptions;
use super::series::{LiquidityBarData, TokenSide};

// ── Host chart contract ──────────────────────────────────────────────

/// Value → vertical media coordinate, supplied by the host chart at paint time.
pub trait PriceToCoordinate {
    fn price_to_coordinate(&self, value: f64) -> Option<f64>;
}

impl<F: Fn(f64) -> Option<f64>> PriceToCoordinate for F {
    fn price_to_coordinate(&self, value: f64) -> Option<f64> {
        self(value)
    }
}

/// Device-pixel target of one paint call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitmapScope {
    pub bitmap_width: i32,
    pub bitmap_height: i32,
    pub horizontal_pixel_ratio: f64,
    pub vertical_pixel_ratio: f64,
}

/// A series row already placed horizontally by the host (media px).
#[derive(Debug, Clone, PartialEq)]
pub struct PaneBar {
    pub x: f64,
    pub data: LiquidityBarData,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaneRendererData {
    pub bars: Vec<PaneBar>,
    /// Distance between adjacent bar centers, media px.
    pub bar_spacing: f64,
    /// Indices into `bars` currently on screen. `None` means nothing visible.
    pub visible_range: Option<Range<usize>>,
}

// ── Fill classification ──────────────────────────────────────────────

/// How a single bar is filled, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarPaint {
    /// Both tokens locked: quote section at the bottom, base on top.
    Stacked { base_ratio: f64 },
    /// The bucket holding the active tick.
    CurrentTick { progress: Option<f64> },
    Single { side: TokenSide },
}

pub fn classify_bar(bar: &LiquidityBarData, options: &LiquiditySeriesOptions) -> BarPaint {
    if bar.has_both_tokens() && bar.base_ratio > 0.0 && bar.base_ratio < 1.0 {
        return BarPaint::Stacked {
            base_ratio: bar.base_ratio,
        };
    }
    if bar.is_current_tick {
        return BarPaint::CurrentTick {
            progress: options.current_tick_progress.map(|p| p.clamp(0.0, 1.0)),
        };
    }
    let side = if bar.tick < options.active_tick {
        TokenSide::Quote
    } else {
        TokenSide::Base
    };
    BarPaint::Single { side }
}

// ── Renderer ─────────────────────────────────────────────────────────

/// Paints one column per visible bucket.
#[derive(Debug, Clone, Default)]
pub struct LiquidityBarRenderer {
    data: Option<PaneRendererData>,
    options: LiquiditySeriesOptions,
    hovered_tick: Option<i32>,
}

impl LiquidityBarRenderer {
    pub fn new(options: LiquiditySeriesOptions) -> Self {
        LiquidityBarRenderer {
            data: None,
            options,
            hovered_tick: None,
        }
    }

    /// Replace data and options for subsequent paints.
    pub fn update(&mut self, data: PaneRendererData, options: LiquiditySeriesOptions) {
        self.data = Some(data);
        self.options = options;
    }

    /// Hover path: only changes which column is emphasised.
    pub fn set_hovered_tick(&mut self, tick: Option<i32>) {
        self.hovered_tick = tick;
    }

    pub fn hovered_tick(&self) -> Option<i32> {
        self.hovered_tick
    }

    pub fn options(&self) -> &LiquiditySeriesOptions {
        &self.options
    }

    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        scope: &BitmapScope,
        scale: &dyn PriceToCoordinate,
    ) {
        let Some(data) = self.data.as_ref() else {
            return;
        };
        let Some(range) = data.visible_range.clone() else {
            return;
        };
        let range = range.start.min(data.bars.len())..range.end.min(data.bars.len());
        if range.is_empty() {
            return;
        }
        let Some(zero_y) = scale.price_to_coordinate(0.0) else {
            return;
        };

        let visible = &data.bars[range];
        let xs: Vec<f64> = visible.iter().map(|b| b.x).collect();
        let columns = calculate_column_positions(&xs, data.bar_spacing, scope.horizontal_pixel_ratio);

        let vpr = scope.vertical_pixel_ratio;
        let zero_bitmap = (zero_y * vpr).round() as i32;
        let radius = self.options.corner_radius.max(0.0) * scope.horizontal_pixel_ratio;

        if let Some(hovered) = self.hovered_tick {
            if let Some(col) = visible
                .iter()
                .zip(&columns)
                .find_map(|(bar, col)| (bar.data.tick == hovered).then_some(col))
            {
                canvas.set_global_alpha(1.0);
                canvas.fill_rect(
                    BitmapRect::new(col.left, 0, col.width(), scope.bitmap_height),
                    self.options.hover_highlight_color,
                );
            }
        }

        for (bar, col) in visible.iter().zip(&columns) {
            let alpha = match self.hovered_tick {
                Some(t) if t != bar.data.tick => self.options.inactive_opacity,
                _ => 1.0,
            };
            canvas.set_global_alpha(alpha);

            let y = scale
                .price_to_coordinate(bar.data.liquidity)
                .unwrap_or(zero_y);
            let rect = self.bar_rect(col, (y * vpr).round() as i32, zero_bitmap);
            self.paint_bar(canvas, &bar.data, rect, radius);
        }

        canvas.set_global_alpha(1.0);
    }

    /// Column rect between the value and the baseline, never shorter than
    /// `min_bar_height`.
    fn bar_rect(&self, col: &ColumnPosition, y: i32, zero_y: i32) -> BitmapRect {
        let top = y.min(zero_y);
        let bottom = y.max(zero_y);
        let min_height = self.options.min_bar_height.max(0);
        let height = (bottom - top).max(min_height);
        BitmapRect::new(col.left, bottom - height, col.width(), height)
    }

    fn side_color(&self, side: TokenSide) -> super::color::Color {
        match side {
            TokenSide::Base => self.options.base_color,
            TokenSide::Quote => self.options.quote_color,
        }
    }

    fn paint_bar<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        bar: &LiquidityBarData,
        rect: BitmapRect,
        radius: f64,
    ) {
        let r = radius.min(rect.width as f64 / 2.0).min(rect.height as f64 / 2.0);

        match classify_bar(bar, &self.options) {
            BarPaint::Stacked { base_ratio } => {
                let mut base_height = (rect.height as f64 * base_ratio).round() as i32;
                if rect.height >= 2 {
                    base_height = base_height.clamp(1, rect.height - 1);
                }
                let base_rect = BitmapRect::new(rect.x, rect.y, rect.width, base_height);
                let quote_rect = BitmapRect::new(
                    rect.x,
                    rect.y + base_height,
                    rect.width,
                    rect.height - base_height,
                );
                canvas.fill_rounded_rect(quote_rect, CornerRadii::bottom(r), self.options.quote_color);
                canvas.fill_rounded_rect(base_rect, CornerRadii::top(r), self.options.base_color);
            }
            BarPaint::CurrentTick { progress } => {
                canvas.fill_rounded_rect(rect, CornerRadii::all(r), self.options.current_tick_color);
                if let Some(p) = progress {
                    // Ticks descend left to right, so the crossed lower part of
                    // the range is the right-hand side of the column.
                    let crossed = (rect.width as f64 * p).round() as i32;
                    if crossed > 0 {
                        let overlay = BitmapRect::new(rect.x + rect.width - crossed, rect.y, crossed, rect.height);
                        let color = self
                            .options
                            .quote_color
                            .with_alpha(self.options.quote_color.a * self.options.progress_overlay_opacity);
                        canvas.fill_rect(overlay, color);
                    }
                }
            }
            BarPaint::Single { side } => {
                canvas.fill_rounded_rect(rect, CornerRadii::all(r), self.side_color(side));
            }
        }
    }
}
