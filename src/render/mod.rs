pub mod canvas;
pub mod color;
pub mod columns;
pub mod host;
pub mod options;
pub mod renderer;
pub mod series;
pub mod svg;

pub use canvas::{BitmapRect, Canvas, CornerRadii, DrawCommand, RecordingCanvas};
pub use color::Color;
pub use columns::{calculate_column_positions, ColumnPosition};
pub use host::{ChartLayout, LinearScale};
pub use options::LiquiditySeriesOptions;
pub use renderer::{
    classify_bar, BarPaint, BitmapScope, LiquidityBarRenderer, PaneBar, PaneRendererData,
    PriceToCoordinate,
};
pub use series::{bars_from_buckets, current_tick_progress, LiquidityBarData, TokenSide};
