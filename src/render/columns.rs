//! Column placement in device pixels.
//!
//! Each bar's x center is snapped to the device grid, columns get a uniform
//! half-width derived from the bar spacing, and neighbours are kept exactly
//! one gap apart. Rounding at different x positions can still leave some
//! columns a pixel wider than others; a final pass evens them out when the
//! columns are narrow enough for that to be visible.

/// Gapped columns narrower than this (device px) get their widths evened out.
pub const ALIGN_TO_MINIMAL_WIDTH_LIMIT: i32 = 4;

/// Bar spacing (device px, rounded up) at or below which the gap collapses.
const SHOW_SPACING_MINIMAL_BAR_WIDTH: i32 = 1;

/// Horizontal extent of one column, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPosition {
    pub left: i32,
    pub right: i32,
    /// The center was rounded up, so spare pixels come off the right side.
    pub shift_left: bool,
}

impl ColumnPosition {
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnCommon {
    spacing: i32,
    shift_left: bool,
    half_width: i32,
    pixel_ratio: f64,
}

/// Gap between columns in device pixels.
pub fn column_spacing(bar_spacing: f64, pixel_ratio: f64) -> i32 {
    if (bar_spacing * pixel_ratio).ceil() as i32 <= SHOW_SPACING_MINIMAL_BAR_WIDTH {
        0
    } else {
        (pixel_ratio.floor() as i32).max(1)
    }
}

fn column_common(bar_spacing: f64, pixel_ratio: f64) -> ColumnCommon {
    let spacing = column_spacing(bar_spacing, pixel_ratio);
    let width = (bar_spacing * pixel_ratio).round() as i32 - spacing;
    let shift_left = width % 2 == 0;
    let half_width = (width - if shift_left { 0 } else { 1 }) / 2;
    ColumnCommon {
        spacing,
        shift_left,
        half_width,
        pixel_ratio,
    }
}

fn place(x: f64, common: &ColumnCommon) -> ColumnPosition {
    let unrounded = x * common.pixel_ratio;
    let center = unrounded.round() as i32;
    ColumnPosition {
        left: center - common.half_width,
        right: center + common.half_width - if common.shift_left { 1 } else { 0 },
        shift_left: (center as f64) > unrounded,
    }
}

/// Compute a column for every x (media px, ascending), returning a table
/// indexed like `xs`.
pub fn calculate_column_positions(xs: &[f64], bar_spacing: f64, pixel_ratio: f64) -> Vec<ColumnPosition> {
    let common = column_common(bar_spacing, pixel_ratio);
    let expected_shift = common.spacing + 1;

    let mut positions: Vec<ColumnPosition> = Vec::with_capacity(xs.len());
    for &x in xs {
        let mut pos = place(x, &common);
        if let Some(prev) = positions.last_mut() {
            if pos.left - prev.right != expected_shift {
                if prev.shift_left {
                    prev.right = pos.left - expected_shift;
                } else {
                    pos.left = prev.right + expected_shift;
                }
            }
        }
        positions.push(pos);
    }

    let mut min_width = (bar_spacing * pixel_ratio).ceil() as i32;
    for pos in positions.iter_mut() {
        if pos.right < pos.left {
            pos.right = pos.left;
        }
        min_width = min_width.min(pos.width());
    }

    if common.spacing > 0 && min_width < ALIGN_TO_MINIMAL_WIDTH_LIMIT {
        for pos in positions.iter_mut() {
            if pos.width() <= min_width {
                continue;
            }
            if pos.shift_left {
                pos.right -= 1;
            } else {
                pos.left += 1;
            }
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_collapses_for_dense_bars() {
        assert_eq!(column_spacing(0.5, 1.0), 0);
        assert_eq!(column_spacing(1.0, 1.0), 0);
        assert_eq!(column_spacing(6.0, 1.0), 1);
        assert_eq!(column_spacing(6.0, 2.0), 2);
        assert_eq!(column_spacing(0.9, 1.5), 1);
    }

    #[test]
    fn test_columns_are_one_gap_apart() {
        let xs: Vec<f64> = (0..10).map(|i| 5.0 + i as f64 * 10.0).collect();
        let cols = calculate_column_positions(&xs, 10.0, 1.0);
        assert_eq!(cols.len(), 10);
        for w in cols.windows(2) {
            assert_eq!(w[1].left - w[0].right, 2);
        }
        assert!(cols.iter().all(|c| c.width() == 9));
    }

    #[test]
    fn test_fractional_ratio_widths_are_uniform() {
        // 3.3 media px spacing at 1.25 dpr: columns land on uneven device pixels.
        let xs: Vec<f64> = (0..40).map(|i| 1.65 + i as f64 * 3.3).collect();
        let cols = calculate_column_positions(&xs, 3.3, 1.25);
        let min = cols.iter().map(|c| c.width()).min().unwrap();
        let max = cols.iter().map(|c| c.width()).max().unwrap();
        assert!(max - min <= 1, "widths {min}..{max}");
        assert!(cols.iter().all(|c| c.right >= c.left));
    }

    #[test]
    fn test_empty_input() {
        assert!(calculate_column_positions(&[], 10.0, 2.0).is_empty());
    }
}
