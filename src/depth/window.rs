use crate::math::{MAX_TICK, MIN_TICK};
use crate::model::TickRange;

/// Fixed-width window centered on `current_tick`, clamped to the global
/// tick bounds. Where liquidity actually sits plays no part, so full-range
/// positions cannot stretch the chart.
pub fn tick_window(current_tick: i32, half_width: i32) -> TickRange {
    let half_width = half_width.max(1) as i64;
    let center = current_tick as i64;
    TickRange {
        min: (center - half_width).max(MIN_TICK as i64) as i32,
        max: (center + half_width).min(MAX_TICK as i64) as i32,
    }
}

/// Bucket width: window span over the target count, rounded up to a
/// multiple of the coarsest tick spacing so boundaries stay legal ticks.
///
/// A spacing wider than the window is capped at the window span, so one
/// bucket never outgrows the chart.
pub fn bucket_size(range: TickRange, target_buckets: u32, coarsest_spacing: u32) -> i32 {
    let span = range.span().max(1) as i64;
    let spacing = (coarsest_spacing as i64).clamp(1, span);
    let target = target_buckets.max(1) as i64;
    let raw = (span + target - 1) / target;
    let rounded = (raw + spacing - 1) / spacing * spacing;
    rounded.max(spacing).min(span) as i32
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Widen `range` outward so both ends fall on multiples of `bucket_size`.
pub fn align_range(range: TickRange, bucket_size: i32) -> TickRange {
    let size = bucket_size.max(1) as i64;
    TickRange {
        min: saturate((range.min as i64).div_euclid(size) * size),
        max: saturate((range.max as i64 + size - 1).div_euclid(size) * size),
    }
}

/// Number of buckets tiling an aligned range: one per step plus the bucket
/// starting at `max`.
pub fn bucket_count(range: TickRange, bucket_size: i32) -> usize {
    let size = bucket_size.max(1) as i64;
    let span = range.span().max(0) as i64;
    ((span + size - 1) / size + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_centered_and_clamped() {
        assert_eq!(tick_window(100, 2000), TickRange { min: -1900, max: 2100 });
        let edge = tick_window(MAX_TICK - 10, 2000);
        assert_eq!(edge.max, MAX_TICK);
        assert_eq!(edge.min, MAX_TICK - 2010);
    }

    #[test]
    fn test_bucket_size_rounds_to_spacing() {
        let range = TickRange { min: -2000, max: 2000 };
        // 4000 / 40 = 100 → next multiple of 60 is 120
        assert_eq!(bucket_size(range, 40, 60), 120);
        assert_eq!(bucket_size(range, 40, 10), 100);
        // Never narrower than one spacing.
        assert_eq!(bucket_size(range, 4000, 200), 200);
        // Never wider than the window.
        assert_eq!(bucket_size(range, 40, u32::MAX), 4000);
    }

    #[test]
    fn test_align_does_not_overflow() {
        let aligned = align_range(TickRange { min: -2000, max: 2000 }, i32::MAX);
        assert_eq!(aligned, TickRange { min: -i32::MAX, max: i32::MAX });
        assert_eq!(aligned.span(), i32::MAX);
    }

    #[test]
    fn test_align_and_count() {
        let aligned = align_range(TickRange { min: -1900, max: 2100 }, 120);
        assert_eq!(aligned, TickRange { min: -1920, max: 2160 });
        assert_eq!(bucket_count(aligned, 120), 35);
    }
}
