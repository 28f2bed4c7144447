use serde::{Deserialize, Serialize};

use super::num;

/// Constant liquidity over `[tick_lower, tick_upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquiditySegment {
    pub tick_lower: i32,
    pub tick_upper: i32,
    #[serde(with = "num::u128_str")]
    pub liquidity: u128,
}

impl LiquiditySegment {
    pub fn width(&self) -> i32 {
        self.tick_upper - self.tick_lower
    }

    /// Intersection with `[lower, upper)`, if non-empty.
    pub fn clip(&self, lower: i32, upper: i32) -> Option<(i32, i32)> {
        let lo = self.tick_lower.max(lower);
        let hi = self.tick_upper.min(upper);
        (lo < hi).then_some((lo, hi))
    }
}
