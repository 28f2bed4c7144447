use serde::{Deserialize, Serialize};

use super::num;

/// Inclusive tick window shown by the depth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRange {
    pub min: i32,
    pub max: i32,
}

impl TickRange {
    pub fn span(&self) -> i32 {
        self.max.saturating_sub(self.min)
    }
}

/// One pool's share of a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolContribution {
    pub fee_pips: u32,
    #[serde(with = "num::u128_str")]
    pub liquidity: u128,
    pub amount_base: f64,
    pub amount_quote: f64,
    pub usd_value: f64,
}

/// A fixed-width display slot `[tick_lower, tick_upper)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityBucket {
    /// Center tick.
    pub tick: i32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Decimal-adjusted price (quote per base) at the center tick.
    pub price: f64,
    #[serde(with = "num::u128_str")]
    pub total_liquidity: u128,
    pub amount_base_locked: f64,
    pub amount_quote_locked: f64,
    pub usd_value_locked: f64,
    pub pool_contributions: Vec<PoolContribution>,
    pub is_current_tick: bool,
}

impl LiquidityBucket {
    pub fn empty(tick_lower: i32, tick_upper: i32, price: f64, is_current_tick: bool) -> Self {
        LiquidityBucket {
            tick: (tick_lower as i64 + tick_upper as i64).div_euclid(2) as i32,
            tick_lower,
            tick_upper,
            price,
            total_liquidity: 0,
            amount_base_locked: 0.0,
            amount_quote_locked: 0.0,
            usd_value_locked: 0.0,
            pool_contributions: Vec::new(),
            is_current_tick,
        }
    }

    pub fn contains_tick(&self, tick: i32) -> bool {
        tick >= self.tick_lower && tick < self.tick_upper
    }

    pub fn is_empty(&self) -> bool {
        self.total_liquidity == 0
    }
}
