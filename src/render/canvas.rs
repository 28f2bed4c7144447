use serde::Serialize;

use super::color::Color;

/// Axis-aligned rectangle in device (bitmap) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitmapRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BitmapRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        BitmapRect { x, y, width, height }
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Per-corner radii in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn all(r: f64) -> Self {
        CornerRadii {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub fn top(r: f64) -> Self {
        CornerRadii {
            top_left: r,
            top_right: r,
            ..Default::default()
        }
    }

    pub fn bottom(r: f64) -> Self {
        CornerRadii {
            bottom_right: r,
            bottom_left: r,
            ..Default::default()
        }
    }

    pub fn is_square(&self) -> bool {
        self.top_left <= 0.0 && self.top_right <= 0.0 && self.bottom_right <= 0.0 && self.bottom_left <= 0.0
    }
}

/// The subset of a 2D drawing context the bar renderer paints with.
///
/// Fills composite source-over, scaled by the current global alpha.
pub trait Canvas {
    fn set_global_alpha(&mut self, alpha: f64);
    fn fill_rect(&mut self, rect: BitmapRect, color: Color);
    fn fill_rounded_rect(&mut self, rect: BitmapRect, radii: CornerRadii, color: Color);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Rect {
        rect: BitmapRect,
        color: Color,
        alpha: f64,
    },
    RoundedRect {
        rect: BitmapRect,
        radii: CornerRadii,
        color: Color,
        alpha: f64,
    },
}

impl DrawCommand {
    pub fn rect(&self) -> BitmapRect {
        match self {
            DrawCommand::Rect { rect, .. } | DrawCommand::RoundedRect { rect, .. } => *rect,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Rect { color, .. } | DrawCommand::RoundedRect { color, .. } => *color,
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            DrawCommand::Rect { alpha, .. } | DrawCommand::RoundedRect { alpha, .. } => *alpha,
        }
    }
}

/// Canvas that keeps every fill as a [`DrawCommand`], in paint order.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    alpha: f64,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        RecordingCanvas {
            alpha: 1.0,
            commands: Vec::new(),
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, rect: BitmapRect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            alpha: self.alpha,
        });
    }

    fn fill_rounded_rect(&mut self, rect: BitmapRect, radii: CornerRadii, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radii,
            color,
            alpha: self.alpha,
        });
    }
}
